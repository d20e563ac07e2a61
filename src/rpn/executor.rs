use crate::error::EvaluationError;
use crate::rpn::{Instruction, Variables};
use log::trace;

/// Postfix stack machine.
pub struct Executor {
    stack: Vec<f64>,
}

impl Executor {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
        }
    }

    /// Runs `instructions` against `variables` and returns the single value left
    /// on the stack. Unset variables evaluate to NaN.
    pub fn execute(
        &mut self,
        instructions: &[Instruction],
        variables: &Variables,
    ) -> Result<f64, EvaluationError> {
        self.stack.clear();

        for instruction in instructions {
            let value = match instruction {
                Instruction::Push(value) => *value,
                Instruction::Load(name) => variables.get(*name),
                Instruction::Unary { operator, .. } => operator(self.pop(instruction)?),
                Instruction::Call { function, .. } => function(self.pop(instruction)?),
                Instruction::Binary { operator, .. } => {
                    let right = self.pop(instruction)?;
                    let left = self.pop(instruction)?;
                    operator(left, right)
                }
            };
            trace!("{instruction} -> {value}");
            self.stack.push(value);
        }

        let result = self
            .stack
            .pop()
            .ok_or_else(|| EvaluationError::StackUnderflow("end of program".to_string()))?;
        if !self.stack.is_empty() {
            return Err(EvaluationError::StackImbalance(self.stack.len() + 1));
        }
        Ok(result)
    }

    fn pop(&mut self, instruction: &Instruction) -> Result<f64, EvaluationError> {
        self.stack
            .pop()
            .ok_or_else(|| EvaluationError::StackUnderflow(instruction.to_string()))
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}
