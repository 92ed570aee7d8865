pub mod arena;
pub mod assemble;
pub mod backend;
pub mod bootstrap;
pub mod config;
pub mod contract;
pub mod disassemble;
pub mod error;
pub mod local;
pub mod node;
pub mod packet;
pub mod session;
pub mod tag;

pub use arena::TfLiteArena;
pub use assemble::assemble_inputs;
pub use backend::{Servable, Server, ServerSettings, Session};
pub use bootstrap::{BootstrapPhase, BootstrapState};
pub use config::{InferenceOptions, ServableVersion, SessionOptions, parse_servable_version};
pub use contract::Contract;
pub use disassemble::Disassembler;
pub use error::{BackendError, ServingError};
pub use local::{LocalServer, Model};
pub use node::InferenceNode;
pub use packet::Packet;
pub use session::open_session;
pub use tag::{Cardinality, TagKind, TensorFormat, classify};
