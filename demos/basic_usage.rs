// ============================================================================
// Basic Usage Example
// ============================================================================

use sd59x18::prelude::*;

fn main() {
    println!("=== SD59x18 Example ===\n");

    // Values are parsed from decimal strings or built from whole numbers
    let price: SD59x18 = "50123.25".parse().expect("valid literal");
    let qty = SD59x18::from_i128(3);
    let fee: SD59x18 = "0.0015".parse().expect("valid literal");

    println!("price = {}", price);
    println!("qty   = {}", qty);
    println!("fee   = {}\n", fee);

    // Typed surface: checked arithmetic returns MathResult
    println!("=== Typed Surface ===");
    let notional = price.checked_mul(qty).expect("in range");
    let charged = notional.checked_mul(fee).expect("in range");
    println!("notional         = {}", notional);
    println!("fee charged      = {}", charged);
    println!("avg(price, qty)  = {}", price.avg(qty));
    println!("sqrt(price)      = {:?}", price.sqrt());
    println!("floor(-2.5)      = {:?}", "-2.5".parse::<SD59x18>().map(SD59x18::floor));
    println!("frac(-2.5)       = {}\n", SD59x18::from_i128(-5).avg(SD59x18::ZERO).frac());

    // Raw surface: the same operations on the scaled I256
    println!("=== Raw Surface ===");
    let x = price.raw_value();
    let y = qty.raw_value();
    println!("mul(x, y) raw    = {:?}", math::mul(x, y));
    println!("avg(-3, 0) raw   = {}", math::avg(I256::from_i128(-3), I256::ZERO));

    // Both surfaces report the same errors
    println!("\n=== Errors ===");
    println!("div by zero      = {:?}", math::div(x, I256::ZERO));
    println!("abs(MIN)         = {:?}", SD59x18::MIN.abs());
    println!("MAX + 1 unit     = {:?}", math::add(MAX_SD59X18, I256::ONE));
    println!("sqrt(-1)         = {:?}", SD59x18::from_i128(-1).sqrt());

    // Every operation, cross-checked between surfaces
    println!("\n=== Cross Check ===");
    for op in Operation::ALL {
        match cross_check(op, x, y) {
            Ok(Ok(value)) => println!("  {:<6} ok   {}", op, SD59x18::from_raw(value)),
            Ok(Err(err)) => println!("  {:<6} err  {}", op, err),
            Err(divergence) => println!("  {:<6} DIVERGED: {}", op, divergence),
        }
    }
}
