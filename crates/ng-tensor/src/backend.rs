use std::fmt::{self, Debug};

use crate::dtype::DType;
use crate::error::Result;
use crate::shape::Shape;
use crate::tensor::Tensor;

/// Element-wise binary operations. All of them broadcast their operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    /// Floor division for integer results, true division otherwise.
    Div,
    /// Floor modulo: the result takes the sign of the divisor.
    Mod,
    Pow,
    Maximum,
    Minimum,
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    LogicalAnd,
    LogicalOr,
    LogicalXor,
}

impl BinaryOp {
    /// True for operations whose result is a `Bool` mask.
    pub fn is_predicate(&self) -> bool {
        !matches!(
            self,
            BinaryOp::Add
                | BinaryOp::Sub
                | BinaryOp::Mul
                | BinaryOp::Div
                | BinaryOp::Mod
                | BinaryOp::Pow
                | BinaryOp::Maximum
                | BinaryOp::Minimum
        )
    }
}

/// Element-wise unary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Abs,
    Neg,
    Sign,
    /// Round half to even.
    Round,
    Ceil,
    Floor,
    Exp,
    Sqrt,
    Log,
    LogicalNot,
}

impl UnaryOp {
    /// The result format of this operation applied to `input`.
    pub fn output_dtype(&self, input: DType) -> DType {
        match self {
            UnaryOp::LogicalNot => DType::Bool,
            UnaryOp::Exp | UnaryOp::Sqrt | UnaryOp::Log => {
                if input.is_float() {
                    input
                } else {
                    DType::F32
                }
            }
            _ => input.arithmetic(),
        }
    }
}

/// Reductions over an explicit list of axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    All,
    Any,
    Max,
    Min,
    Sum,
    Prod,
    Mean,
}

impl fmt::Display for ReduceOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReduceOp::All => "all",
            ReduceOp::Any => "any",
            ReduceOp::Max => "max",
            ReduceOp::Min => "min",
            ReduceOp::Sum => "sum",
            ReduceOp::Prod => "prod",
            ReduceOp::Mean => "mean",
        };
        write!(f, "{}", name)
    }
}

/// Index-of-extremum reductions along a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgReduceOp {
    ArgMax,
    ArgMin,
}

/// Trait for pluggable compute backends.
///
/// Every operation takes tensors by reference and returns a new tensor;
/// no implementation may mutate its inputs. Incompatible shapes, bad axes
/// and other faults are reported as `TensorError`s. Results are never
/// saturated: an I32 result may hold values outside the i32 range.
pub trait ComputeBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "cpu").
    fn name(&self) -> &str;

    /// Element-wise binary operation with numpy-style broadcasting.
    ///
    /// Predicates yield `Bool`; arithmetic yields the promoted format of
    /// both operands (booleans count as I32).
    fn binary(&self, op: BinaryOp, a: &Tensor, b: &Tensor) -> Result<Tensor>;

    /// Element-wise unary operation. See `UnaryOp::output_dtype`.
    fn unary(&self, op: UnaryOp, x: &Tensor) -> Result<Tensor>;

    /// Reduce over `axes`, dropping the reduced dimensions.
    ///
    /// An empty axis list reduces nothing. Axes must be in range and unique.
    fn reduce(&self, op: ReduceOp, x: &Tensor, axes: &[usize]) -> Result<Tensor>;

    /// Index of the extremum along `axis`, as an I32 tensor. Ties resolve to
    /// the first index.
    fn arg_reduce(&self, op: ArgReduceOp, x: &Tensor, axis: usize) -> Result<Tensor>;

    /// Convert to another format.
    fn cast(&self, x: &Tensor, dtype: DType) -> Result<Tensor>;

    /// Same elements in row-major order under a new shape.
    fn reshape(&self, x: &Tensor, shape: &Shape) -> Result<Tensor>;

    /// Stretch `x` to exactly `shape`.
    fn broadcast_to(&self, x: &Tensor, shape: &Shape) -> Result<Tensor>;

    /// Drop size-1 dimensions. An empty axis list drops every size-1 dimension.
    fn squeeze(&self, x: &Tensor, axes: &[usize]) -> Result<Tensor>;

    /// Join tensors along `axis`. All other dimensions must match.
    fn concat(&self, xs: &[Tensor], axis: usize) -> Result<Tensor>;

    /// Pure element-wise selection: `if_true` where `mask` is set, `if_false`
    /// elsewhere, with all three broadcast together. The result takes the
    /// format of `if_false`.
    fn select(&self, mask: &Tensor, if_true: &Tensor, if_false: &Tensor) -> Result<Tensor>;
}
