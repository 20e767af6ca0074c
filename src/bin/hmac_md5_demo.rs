use hmac_md5::hmac_md5;

fn main() {
    let key = b"supersecretkey";
    let message = "This is a secure message.";

    let mac = hmac_md5(key, message.as_bytes());

    println!("{}", message);
    println!("Message Authentication Code (MAC) for the message: {}", mac);
}
