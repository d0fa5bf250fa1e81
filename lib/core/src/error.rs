//! Shared error plumbing.
//!
//! Crates keep their own domain error enums next to the code that raises
//! them. When an error needs to travel through more than one layer it is
//! carried in a rootcause [`Report`] so each layer can attach context.

use rootcause::Report;

/// Result carrying a rootcause [`Report`] whose current context is `C`.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "boom")
        }
    }

    impl std::error::Error for Boom {}

    fn explode() -> Result<(), Boom> {
        Err::<(), _>(Boom)?;
        Ok(())
    }

    #[test]
    fn domain_errors_convert_into_reports() {
        let report = explode().expect_err("should fail");
        assert!(report.to_string().contains("boom"));
    }
}
