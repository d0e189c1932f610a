/// Unwraps an `Ok`, panicking with the `Err` value otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Ok(v) => v,
            Err(err) => {
                let context: Option<String> = None $( .or(Some(format!($($t)*))) )?;
                match context {
                    Some(context) => panic!("expected `Ok`; err={err}, {context}"),
                    None => panic!("expected `Ok`; err={err}"),
                }
            }
        }
    };
}

/// Unwraps an `Err`, panicking with the `Ok` value otherwise.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(err) => err,
            Ok(v) => {
                let context: Option<String> = None $( .or(Some(format!($($t)*))) )?;
                match context {
                    Some(context) => panic!("expected `Err`; ok={v:?}, {context}"),
                    None => panic!("expected `Err`; ok={v:?}"),
                }
            }
        }
    };
}
