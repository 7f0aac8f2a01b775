pub mod camera;
pub mod connection;
pub mod drag;
pub mod touch;

pub use camera::Camera;
pub use connection::PendingConnection;
pub use drag::NodeDrag;
pub use touch::TouchState;
