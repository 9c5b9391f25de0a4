mod ecb;
mod util;

pub use ecb::{ecb_decrypt_in_place, ecb_encrypt_in_place};
