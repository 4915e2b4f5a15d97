//! Test helper functions

pub fn identifiers(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("0x{i:04x}")).collect()
}

pub fn scenario_batch() -> Vec<String> {
    vec!["0xabc".to_string(), "0xdef".to_string(), "0x123".to_string()]
}
