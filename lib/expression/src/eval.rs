use crate::error::MathError;
use crate::token::Operator;
use crate::Expr;

fn finite(v: f64) -> Result<f64, MathError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(MathError::NonFinite)
    }
}

impl Operator {
    pub fn apply(self, l: f64, r: f64) -> Result<f64, MathError> {
        let v = match self {
            Operator::Add => l + r,
            Operator::Sub => l - r,
            Operator::Mul => l * r,
            Operator::Div | Operator::Rem if r == 0. => return Err(MathError::DivisionByZero),
            Operator::Div => l / r,
            Operator::Rem => l % r,
        };
        finite(v)
    }
}

impl Expr {
    /// Evaluates children before applying the operator at each node
    pub fn evaluate(&self) -> Result<f64, MathError> {
        match self {
            Expr::Literal(v) => finite(*v),
            Expr::Binary(op, l, r) => {
                let l = l.evaluate()?;
                let r = r.evaluate()?;
                op.apply(l, r)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(op: Operator, l: f64, r: f64) -> Expr {
        Expr::Binary(op, Box::new(Expr::Literal(l)), Box::new(Expr::Literal(r)))
    }

    #[test]
    fn test_apply() -> Result<(), MathError> {
        assert_eq!(Operator::Add.apply(34., 6.)?, 40.);
        assert_eq!(Operator::Div.apply(34., 2.)?, 17.);
        assert_eq!(Operator::Rem.apply(7., 3.)?, 1.);
        assert_eq!(Operator::Rem.apply(-7., 3.)?, -1.);
        assert_eq!(Operator::Rem.apply(5.5, 2.)?, 1.5);
        Ok(())
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Operator::Div.apply(10., 0.).unwrap_err(),
            MathError::DivisionByZero
        );
        assert_eq!(
            Operator::Rem.apply(10., -0.).unwrap_err(),
            MathError::DivisionByZero
        );
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(
            Operator::Mul.apply(1e200, 1e200).unwrap_err(),
            MathError::NonFinite
        );
        assert_eq!(
            Expr::Literal(f64::INFINITY).evaluate().unwrap_err(),
            MathError::NonFinite
        );
    }

    #[test]
    fn test_evaluate_tree() -> Result<(), MathError> {
        let tree = Expr::Binary(
            Operator::Sub,
            Box::new(binary(Operator::Mul, 3., 4.)),
            Box::new(binary(Operator::Div, 1., 4.)),
        );
        assert_eq!(tree.evaluate()?, 11.75);

        let failing = Expr::Binary(
            Operator::Add,
            Box::new(Expr::Literal(1.)),
            Box::new(binary(Operator::Div, 1., 0.)),
        );
        assert_eq!(failing.evaluate().unwrap_err(), MathError::DivisionByZero);
        Ok(())
    }
}
