//! C# declarations to TypeScript declarations.
//!
//! This crate is the translation engine. It takes the declaration model
//! produced by `cs2ts-parser` and emits TypeScript text, reporting anything
//! it cannot translate instead of failing.
//!
//! # Overview
//!
//! | Component | Module | Role |
//! |-----------|--------|------|
//! | Type mapper | [`map_type`] | type references to TypeScript types |
//! | Expression evaluator | [`eval_expr`] | enum initializers to constants |
//! | Doc extractor | [`extract_doc`] | `<summary>` to `/** */` blocks |
//! | Declaration walker | [`emit_declarations`] | `export type` / `export enum` blocks |
//! | Import resolver | [`resolve_imports`] | sorted, deduplicated import lines |
//! | Diagnostics | [`Diagnostics`] | warnings and `<???>` placeholders |
//!
//! All mutable state of one call lives in a [`Session`]; nothing is shared
//! between calls, so independent calls may run on different threads.
//!
//! # Example
//!
//! ```
//! use cs2ts_emitter::generate;
//!
//! let source = r"
//! namespace Shop
//! {
//!     public enum Status { Open, Closed = 5 }
//!
//!     public class Order<T>
//!     {
//!         public int? Id { get; set; }
//!         public List<T> Items { get; set; }
//!         public Status State { get; set; }
//!     }
//! }
//! ";
//!
//! let generated = generate(source, "", "")?;
//! assert_eq!(
//!     generated.output,
//!     "export enum Status {\n  Open,\n  Closed = 5,\n}\n\n\
//!      export type Order<T> = {\n  id?: number;\n  items: T[];\n  state: Status;\n};\n"
//! );
//! # Ok::<(), cs2ts_emitter::GenerateError>(())
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod diagnostics;
pub mod doc;
pub mod error;
pub mod expression;
pub mod generate;
pub mod resolver;
pub mod session;
pub mod type_mapper;
pub mod walker;

pub use diagnostics::Diagnostics;
pub use doc::extract_doc;
pub use error::GenerateError;
pub use expression::eval_expr;
pub use generate::{
    Generated, format_warnings_header, generate, generate_declarations, generate_with_config,
    generate_with_parser,
};
pub use resolver::{assemble, resolve_imports};
pub use session::{GenericScope, Session};
pub use type_mapper::map_type;
pub use walker::{camel_case, emit_declarations};
