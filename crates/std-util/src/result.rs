/// Unwraps an `Err`, panicking with the `Ok` value otherwise. Extra arguments
/// are formatted into the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            Ok(actual) => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Err`; actual=Ok({:?})", actual);
                $( msg.push_str(&format!(", {}", format_args!($($t)*))); )?
                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps an `Ok`, panicking with the error's display chain otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Ok(v) => v,
            Err(err) => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Ok`; error=\"{}\"", err);
                $( msg.push_str(&format!(", {}", format_args!($($t)*))); )?
                panic!("{}", msg);
            }
        }
    };
}

/// Asserts that an expression fails and that the error satisfies the named
/// predicate method, e.g. `assert_err_is!(db.find(&mut a, 9).await, is_record_not_found)`.
#[macro_export]
macro_rules! assert_err_is {
    ($e:expr, $pred:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$pred(),
            concat!("expected error to satisfy `", stringify!($pred), "`; error=\"{}\""),
            err
        );
        err
    }};
}
