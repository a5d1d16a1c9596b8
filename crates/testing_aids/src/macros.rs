// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Asserts that the statement panics, returning the panic payload.
///
/// With a second argument, also asserts that the panic message contains that text.
// We assert unwind safety here because the topic is too much hassle to worry about and since
// #[should_panic] does not require us to worry about it, we are not going to worry about it here.
#[macro_export]
macro_rules! assert_panic {
    ($stmt:stmt$(,)?) => {
        #[allow(clippy::multi_assignments, reason = "macro untidiness")]
        #[expect(clippy::allow_attributes, reason = "macro untidiness")]
        ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| -> () { _ = { $stmt } }))
            .expect_err("assert_panic! argument did not panic")
    };
    ($stmt:stmt, $expected:expr$(,)?) => {{
        #[allow(clippy::multi_assignments, reason = "macro untidiness")]
        #[expect(clippy::allow_attributes, reason = "macro untidiness")]
        let payload = ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| -> () { _ = { $stmt } }))
            .expect_err("assert_panic! argument did not panic");
        let message = $crate::panic_message(payload.as_ref());
        assert!(
            message.contains($expected),
            "panic message {message:?} does not contain {:?}",
            $expected
        );
        payload
    }};
}

/// The text of a panic payload, as produced by `panic!` with a literal or formatted message.
#[must_use]
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::new()
    }
}
