//! Descriptor variants.
//!
//! Leaves ([`StringSchema`], [`NumberSchema`], [`BooleanSchema`],
//! [`NullSchema`], [`UndefinedSchema`]), containers ([`ObjectSchema`],
//! [`ArraySchema`]) and the binary [`UnionSchema`] combinator.

mod array;
mod number;
mod object;
mod primitive;
mod string;
mod union;

pub use array::ArraySchema;
pub use number::NumberSchema;
pub use object::ObjectSchema;
pub use primitive::{BooleanSchema, NullSchema, UndefinedSchema};
pub use string::StringSchema;
pub use union::UnionSchema;
