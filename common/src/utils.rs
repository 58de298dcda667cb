use rand::random;

pub fn random_bool_by_given_probability(probability: f32) -> bool {
    let rand_value: f32 = random();
    rand_value < probability
}

/// Normalizes user input for an order id. Returns `None` for blank input.
pub fn normalize_order_id(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn print_welcome_message() {
    println!("=============================================");
    println!("  Order status dashboard");
    println!("  search <order id> | set <status> | show | help | quit");
    println!("=============================================");
}
