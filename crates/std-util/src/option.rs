/// Panics unless the expression is `None`. The expression is only borrowed.
#[macro_export]
macro_rules! assert_none {
    ($e:expr) => {
        if let Some(v) = &$e {
            panic!("expected `None`; some={v:?}");
        }
    };
}

/// Unwraps a `Some`.
#[macro_export]
macro_rules! assert_some {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => panic!("expected `Some`; got `None`"),
        }
    };
}
