//! Cold-Junction Compensation Example
//!
//! A thermocouple measures the voltage difference between its tip and its
//! reference junction. When the reference junction sits at board
//! temperature instead of 0°C, the raw signal under-reports the tip
//! voltage. This example shows how compensation recovers the absolute tip
//! temperature.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_cold_junction
//! ```

use pyrometry_core::TYPE_S;

fn main() {
    println!("Pyrometry Cold-Junction Compensation Example");
    println!("============================================\n");

    // A furnace tip at 1000°C, measured from a board sitting at 25°C.
    // The ADC sees the difference of the two junction voltages.
    let tip_c = 1000.0;
    let board_c = 25.0;

    let e_tip = TYPE_S.cold_junction_mv(tip_c).unwrap();
    let e_board = TYPE_S.cold_junction_mv(board_c).unwrap();
    let measured_mv = e_tip - e_board;

    println!("Simulated measurement:");
    println!("  Tip junction:        {:.1}°C -> {:.4} mV", tip_c, e_tip);
    println!("  Reference junction:  {:.1}°C -> {:.4} mV", board_c, e_board);
    println!("  ADC sees:            {:.4} mV", measured_mv);
    println!();

    // Naive conversion ignores the reference junction and reads low
    let naive = TYPE_S.temperature_c(measured_mv).unwrap();
    println!("Without compensation: {:.2}°C (reads low by {:.1}°C)", naive, tip_c - naive);

    // Compensation adds the reference junction's equivalent voltage back
    let compensated = TYPE_S.compensated_c(measured_mv, board_c).unwrap();
    println!("With compensation:    {:.2}°C", compensated);
    println!();

    // The Fahrenheit surface composes the same way
    let board_f = 77.0; // 25°C
    let compensated_f = TYPE_S.compensated_f(measured_mv, board_f).unwrap();
    println!("Fahrenheit surface:   {:.2}°F", compensated_f);
    println!();

    // A bad ambient reading fails before it can poison the voltage sum
    match TYPE_S.compensated_c(measured_mv, -100.0) {
        Ok(_) => unreachable!(),
        Err(e) => println!("Bad ambient (-100°C) rejected: {}", e),
    }

    println!("\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- Raw signals under-report by the reference junction's voltage");
    println!("- Compensation composes direct and inverse lookups");
    println!("- Ambient range failures are attributable, not silent");
}
