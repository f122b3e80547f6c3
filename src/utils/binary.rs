/// Format a byte as 8 zero-padded binary digits
pub fn format_binary(byte: u8) -> String {
    format!("{:08b}", byte)
}

/// Format bytes as `[00000001, 10000000]`
pub fn format_binary_slice(bytes: &[u8]) -> String {
    let parts: Vec<String> = bytes.iter().map(|&b| format_binary(b)).collect();
    format!("[{}]", parts.join(", "))
}
