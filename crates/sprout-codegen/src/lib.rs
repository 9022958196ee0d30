//! Multi-target code generation from Sprout components.
//!
//! Every backend is a [`BackendProfile`] driving the same [`Emitter`]; the
//! [`Pipeline`] runs validation once per component and then emits it for
//! each configured backend.
//!
//! # Features
//!
//! - `react-native` - ship [`BackendProfile::react_native`]
//! - `sketch` - ship [`BackendProfile::sketch`] for react-sketchapp
//!
//! # Example
//!
//! ```ignore
//! use sprout_codegen::{BackendProfile, Pipeline};
//!
//! let pipeline = Pipeline::new(catalog).with_backend(BackendProfile::react_native())?;
//! for output in pipeline.generate(&component)? {
//!     for file in output.result? {
//!         println!("{}:\n{}", file.path, file.content);
//!     }
//! }
//! ```

pub mod error;
pub mod generators;
pub mod pipeline;
pub mod plan;
pub mod profile;

pub use error::{CodegenError, Result};
pub use generators::{CodeGenerator, Emitter, GeneratedFile, TemplateEngine};
pub use pipeline::{BackendOutput, ComponentOutput, Pipeline};
pub use plan::{entry_name, plan_component, StyleEntry, StylePlan, StyleSource};
pub use profile::{BackendProfile, ConditionalSyntax, StyleTableSyntax, TokenAccessConfig};
