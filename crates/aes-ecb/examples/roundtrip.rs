//! Encrypts and decrypts the reference message, printing both directions.

use aes_ecb::{decrypt, encrypt};

fn main() {
    let key = b"1234567812345678";
    let message = b"Hello, world!";

    let ciphertext = encrypt(message, key).expect("key length is valid");
    println!("ciphertext: {}", hex::encode(&ciphertext));

    let plaintext = decrypt(&ciphertext, key).expect("ciphertext is well-formed");
    assert_eq!(plaintext, message);
    println!("plaintext: {}", String::from_utf8_lossy(&plaintext));
}
