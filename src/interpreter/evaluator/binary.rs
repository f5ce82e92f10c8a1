use crate::ast::BinaryOperator;

impl BinaryOperator {
    /// Applies the operator to two evaluated operands.
    ///
    /// Division by zero and out-of-domain powers are not errors; they follow
    /// IEEE-754 and produce infinities or NaN.
    ///
    /// # Example
    /// ```
    /// use mathlang::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(10.0, 3.0), 7.0);
    /// assert_eq!(BinaryOperator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
            Self::Root => Self::eval_root(left, right),
        }
    }

    /// Computes the `degree`-th root of `base` as `base^(1/degree)`.
    ///
    /// Inherits the domain of real powers: a negative base with a
    /// non-integral reciprocal exponent gives NaN, even for odd degrees.
    ///
    /// # Example
    /// ```
    /// use mathlang::ast::BinaryOperator;
    ///
    /// assert!((BinaryOperator::eval_root(27.0, 3.0) - 3.0).abs() < 1e-12);
    /// assert!(BinaryOperator::eval_root(-8.0, 3.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_root(base: f64, degree: f64) -> f64 {
        base.powf(1.0 / degree)
    }
}
