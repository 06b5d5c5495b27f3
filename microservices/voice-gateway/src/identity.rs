//! Display identities for connecting browser clients.

use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Amelia", "Benjamin", "Charlotte", "Daniel", "Ella", "Ethan", "Grace",
    "Harper", "Henry", "Isabella", "Jack", "James", "Liam", "Lucas", "Mason",
    "Mia", "Noah", "Oliver", "Olivia", "Owen", "Ruby", "Samuel", "Sophia",
];

/// Random `<FirstName><5-digit code>` label, e.g. `Alice94103`.
/// Not unique; collisions are fine.
pub fn generate_identity() -> String {
    generate_identity_with(&mut rand::thread_rng())
}

pub fn generate_identity_with<R: Rng>(rng: &mut R) -> String {
    let name = FIRST_NAMES.choose(rng).copied().unwrap_or("Caller");
    let code: u32 = rng.gen_range(0..100_000);
    format!("{}{:05}", name, code)
}
