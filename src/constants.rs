// Bit masks used by `StatusFlags::bits`
pub const FLAG_UNDERFLOW: u8 = 0b0000_0001;
pub const FLAG_OVERFLOW: u8 = 0b0000_0010;
pub const FLAG_MASK: u8 = FLAG_UNDERFLOW | FLAG_OVERFLOW;

// Text tokens, as rendered by `StatusFlags::to_text`
pub const TOKEN_NOTHING: &str = "NOTHING";
pub const TOKEN_UNDERFLOW: &str = "UNDERFLOW";
pub const TOKEN_OVERFLOW: &str = "OVERFLOW";
pub const TOKEN_UNDERFLOW_OVERFLOW: &str = "UNDERFLOW OVERFLOW";
