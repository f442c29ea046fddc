//! Call statements for stored procedures.
//!
//! Procedures come in two shapes:
//!
//! - row-set procedures, called as `SELECT * FROM sp_name($1, ..., $n)`
//! - scalar procedures returning an affected-row count, a new id or a status
//!   message, called as `SELECT sp_name($1, ..., $n)`
//!
//! Repositories declare each procedure they use as a [`Procedure`] constant
//! and bind positional parameters in catalog order.

use std::fmt::Write;

/// A stored procedure name and its positional parameter count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Procedure {
    name: &'static str,
    arity: usize,
}

impl Procedure {
    pub const fn new(name: &'static str, arity: usize) -> Self {
        Self { name, arity }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Statement for a procedure returning a row set.
    pub fn rows_sql(&self) -> String {
        format!("SELECT * FROM {}({})", self.name, placeholders(self.arity))
    }

    /// Statement for a procedure returning a single scalar value.
    pub fn scalar_sql(&self) -> String {
        format!("SELECT {}({})", self.name, placeholders(self.arity))
    }
}

/// `$1, $2, ..., $n`, empty for zero.
fn placeholders(arity: usize) -> String {
    let mut out = String::new();
    for i in 1..=arity {
        if i > 1 {
            out.push_str(", ");
        }
        let _ = write!(out, "${i}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_sql_without_parameters() {
        let proc_ = Procedure::new("sp_get_videos", 0);
        assert_eq!(proc_.rows_sql(), "SELECT * FROM sp_get_videos()");
    }

    #[test]
    fn rows_sql_numbers_parameters_in_order() {
        let proc_ = Procedure::new("sp_get_videos_by_type", 1);
        assert_eq!(proc_.rows_sql(), "SELECT * FROM sp_get_videos_by_type($1)");

        let proc_ = Procedure::new("sp_update_video", 8);
        assert_eq!(
            proc_.rows_sql(),
            "SELECT * FROM sp_update_video($1, $2, $3, $4, $5, $6, $7, $8)"
        );
    }

    #[test]
    fn scalar_sql_selects_the_function_value() {
        let proc_ = Procedure::new("sp_delete_video", 1);
        assert_eq!(proc_.scalar_sql(), "SELECT sp_delete_video($1)");
        assert_eq!(proc_.name(), "sp_delete_video");
        assert_eq!(proc_.arity(), 1);
    }
}
