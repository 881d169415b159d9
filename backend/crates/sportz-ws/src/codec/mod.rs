mod control_message;
mod message_codec;
mod outbound_frame;
mod server_message;

pub use control_message::ControlMessage;
pub use message_codec::MessageCodec;
pub use outbound_frame::OutboundFrame;
pub use server_message::ServerMessage;
