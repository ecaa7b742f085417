// This binary crate is intentionally minimal.
// All network logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example xor
//   cargo run --example logic_gates
fn main() {
    println!("ntic: a small feedforward neural network library.");
    println!("Run `cargo run --example xor` to see the XOR demo.");
}
