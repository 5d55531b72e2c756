use core::fmt;

macro_rules! event {
    ($level:expr, $($arg:tt)+) => {
        {
            #[cfg(any(feature = "tracing", test))]
            {
                use tracing::Level;
                tracing::event!($level, $($arg)+)
            }
        }
    };
}

macro_rules! trace {
    ($($arg:tt)+) => {
        event!(Level::TRACE, $($arg)+)
    };
}

#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)+) => {
        event!(Level::DEBUG, $($arg)+)
    };
}

#[cfg(not(test))]
macro_rules! test_trace {
    ($($args:tt)+) => {};
}

#[cfg(test)]
macro_rules! test_trace {
    ($($args:tt)+) => {
        debug!(
            location = %core::panic::Location::caller(),
            $($args)+
        );
    };
}

/// Formats an `Option` as its inner value, or as `None`.
pub(crate) struct FmtOption<'a, T> {
    opt: Option<&'a T>,
}

// === impl FmtOption ===

impl<'a, T> FmtOption<'a, T> {
    pub(crate) fn new(opt: &'a Option<T>) -> Self {
        Self { opt: opt.as_ref() }
    }
}

impl<T: fmt::Debug> fmt::Debug for FmtOption<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opt {
            Some(val) => val.fmt(f),
            None => f.write_str("None"),
        }
    }
}

#[cfg(test)]
pub(crate) fn assert_send_sync<T: Send + Sync>() {}
