//! # Ontio VM
//!
//! The instruction-set layer used to build Ontology invocation scripts.
//!
//! [`ScriptBuilder`] emits push-data and opcode bytes in program order;
//! [`ScriptReader`] walks the push-data instructions back out of a script,
//! which is all the transaction decoder needs to recover witness data.
//!
//! ```rust
//! use ontio_vm::{OpCode, ScriptBuilder};
//!
//! let mut sb = ScriptBuilder::new();
//! sb.push_num(0).push_opcode(OpCode::SYSCALL);
//! assert_eq!(sb.to_hex(), "0068");
//! ```

pub mod error;
pub mod op_code;
pub mod script_builder;
pub mod script_reader;

pub use error::{VmError, VmResult};
pub use op_code::OpCode;
pub use script_builder::ScriptBuilder;
pub use script_reader::ScriptReader;
