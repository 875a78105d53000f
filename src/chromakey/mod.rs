pub mod alpha;
pub mod anchor;
pub mod composite;
pub mod cutout;
pub mod hue;
pub mod mask;
pub mod pipeline;
pub mod resize;
pub mod segment;
pub mod threshold;
