//! Trunk binary target for the Letter Drive client.

fn main() {
    #[cfg(feature = "csr")]
    letter_drive::mount();
}
