use serde::Serialize;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each variant owns its children exclusively, so the tree is finite and
/// acyclic. Every node records the byte offset of the token that introduced
/// it: the literal, the operator, or the opening parenthesis.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal's value.
        value:  f64,
        /// Offset of the literal in the source.
        offset: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Offset of the operator in the source.
        offset: usize,
    },
    /// An expression wrapped in parentheses.
    Parenthesized {
        /// The wrapped expression.
        inner:  Box<Self>,
        /// Offset of the opening parenthesis in the source.
        offset: usize,
    },
}

impl Expr {
    /// Gets the source offset from `self`.
    /// ## Example
    /// ```
    /// use treecalc::ast::Expr;
    ///
    /// let expr = Expr::Number { value:  4.0,
    ///                           offset: 5, };
    ///
    /// assert_eq!(expr.offset(), 5);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Number { offset, .. }
            | Self::BinaryOp { offset, .. }
            | Self::Parenthesized { offset, .. } => *offset,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// The operator's name, used as the label of canonical tree branches.
    ///
    /// ## Example
    /// ```
    /// use treecalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Mul.name(), "mul");
    /// assert_eq!(BinaryOperator::Mul.to_string(), "*");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
