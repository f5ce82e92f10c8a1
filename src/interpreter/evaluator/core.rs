use crate::ast::{Expr, SyntaxTree, Var};

impl Expr {
    /// Evaluates the expression at the point `(x, y)`.
    ///
    /// Precedence is already encoded in the tree's shape, so this is a plain
    /// recursive walk. It never fails: mathematically undefined results come
    /// back as infinities or NaN.
    ///
    /// # Example
    /// ```
    /// use mathlang::parse;
    ///
    /// let tree = parse("x * y").unwrap();
    /// assert_eq!(tree.nodes()[0].eval(3.0, 4.0), 12.0);
    /// ```
    #[must_use]
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        match self {
            Self::Literal { value } => value.into_inner(),
            Self::Variable { var: Var::X } => x,
            Self::Variable { var: Var::Y } => y,
            Self::Negate { expr } => Self::eval_negate(expr.eval(x, y)),
            Self::BinaryOp { left, op, right } => op.apply(left.eval(x, y), right.eval(x, y)),
            Self::FunctionCall { func, argument } => func.apply(argument.eval(x, y)),
        }
    }
}

impl SyntaxTree {
    /// Evaluates the tree at `(x, y)`: the sum of all top-level expressions,
    /// or `0.0` for an empty tree.
    ///
    /// This is a pure function and is safe to call concurrently from many
    /// threads on the same tree.
    ///
    /// # Example
    /// ```
    /// use mathlang::parse;
    ///
    /// assert_eq!(parse("x+y").unwrap().eval(2.0, 3.0), 5.0);
    /// assert_eq!(parse("").unwrap().eval(2.0, 3.0), 0.0);
    /// assert!(parse("1/0").unwrap().eval(0.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        self.nodes().iter().map(|node| node.eval(x, y)).sum()
    }
}
