use crate::ast::Function;

impl Function {
    /// Applies the function to an argument in radians.
    ///
    /// # Example
    /// ```
    /// use mathlang::ast::Function;
    ///
    /// assert_eq!(Function::Sin.apply(0.0), 0.0);
    /// assert_eq!(Function::Cos.apply(0.0), 1.0);
    /// assert_eq!(Function::Tan.apply(0.0), 0.0);
    /// ```
    #[must_use]
    pub fn apply(self, argument: f64) -> f64 {
        match self {
            Self::Sin => argument.sin(),
            Self::Cos => argument.cos(),
            Self::Tan => argument.tan(),
        }
    }
}
