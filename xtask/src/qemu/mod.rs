mod builder;

pub use builder::{qemu_binary, QemuBuilder};
