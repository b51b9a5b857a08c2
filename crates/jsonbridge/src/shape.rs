//! Reconstruction shapes: records with a declared positional constructor.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ConstructionError;

/// A record type that can be rebuilt from an ordered list of values.
///
/// `PARAMETERS` names the constructor's parameters in positional order and
/// `construct` pulls them off an [`Arguments`] cursor in that same order.
/// Usually derived:
///
/// ```rust
/// use jsonbridge::Reconstruct;
///
/// #[derive(Reconstruct)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// assert_eq!(Point::PARAMETERS, &["x", "y"]);
/// ```
pub trait Reconstruct: Sized {
    /// Shape name used in error messages.
    const NAME: &'static str;

    /// Constructor parameter names, in positional order.
    const PARAMETERS: &'static [&'static str];

    /// Builds the record from the next values on the cursor.
    ///
    /// Implementations must not check for leftover values; the caller does
    /// that once construction succeeded.
    fn construct(args: &mut Arguments) -> Result<Self, ConstructionError>;
}

/// Cursor over the positional values handed to a [`Reconstruct`] constructor.
///
/// A `None` slot is a parameter with no value (named lookup found no key). It
/// behaves like running off the end: `Option` parameters read it as `None`,
/// anything else fails with [`ConstructionError::MissingArgument`].
#[derive(Debug)]
pub struct Arguments {
    shape: &'static str,
    values: std::vec::IntoIter<Option<Value>>,
    position: usize,
    supplied: usize,
}

impl Arguments {
    pub fn new(shape: &'static str, values: Vec<Option<Value>>) -> Self {
        let supplied = values.len();
        Self {
            shape,
            values: values.into_iter(),
            position: 0,
            supplied,
        }
    }

    /// Takes the next value and converts it to the parameter's type.
    pub fn next<T: DeserializeOwned>(
        &mut self,
        parameter: &'static str,
    ) -> Result<T, ConstructionError> {
        let position = self.position;
        self.position += 1;

        match self.values.next().flatten() {
            Some(value) => {
                serde_json::from_value(value).map_err(|err| ConstructionError::InvalidArgument {
                    shape: self.shape,
                    parameter,
                    position,
                    reason: err.to_string(),
                })
            }
            None => serde_json::from_value(Value::Null).map_err(|_| {
                ConstructionError::MissingArgument {
                    shape: self.shape,
                    parameter,
                    position,
                }
            }),
        }
    }

    /// Number of values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Fails if values are left over after construction.
    pub fn finish(self) -> Result<(), ConstructionError> {
        if self.remaining() > 0 {
            return Err(ConstructionError::TooManyArguments {
                shape: self.shape,
                expected: self.position,
                found: self.supplied,
            });
        }
        Ok(())
    }
}
