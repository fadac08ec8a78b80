//! Support pipeline nodes: Init, Classify, CheckAccess, Retrieve, Generate.
//!
//! Five nodes implementing `Node<SupportState>` for the linear chain
//! init → classify → check_access → retrieve → generate. Each writes exactly
//! one derived field (generate appends the reply); only generate touches the
//! network.

mod access_node;
mod classify_node;
mod generate_node;
mod init_node;
mod retrieve_node;

pub use access_node::CheckAccessNode;
pub use classify_node::ClassifyNode;
pub use generate_node::GenerateNode;
pub use init_node::InitNode;
pub use retrieve_node::RetrieveNode;
