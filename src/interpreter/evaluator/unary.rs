use crate::ast::Expr;

impl Expr {
    /// Evaluates unary minus as multiplication by `-1`.
    ///
    /// # Example
    /// ```
    /// use mathlang::ast::Expr;
    ///
    /// assert_eq!(Expr::eval_negate(2.5), -2.5);
    /// assert!(Expr::eval_negate(f64::NAN).is_nan());
    /// ```
    #[must_use]
    #[allow(clippy::neg_multiply)]
    pub fn eval_negate(value: f64) -> f64 {
        -1.0 * value
    }
}
