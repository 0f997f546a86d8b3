//! Degree helpers and circular statistics in a few lines.

use clockwork::{
    bound_to_180, circular_mean, circular_mean_with, circular_std, is_angle_between, Circle,
    MeanOptions, ZeroResultant,
};

fn main() {
    println!("bound_to_180(270)   = {}", bound_to_180(270.0));
    println!("bound_to_180(-180)  = {}", bound_to_180(-180.0));
    println!("60 in [25, 92]?       {}", is_angle_between(25.0, 60.0, 92.0));
    println!("0 in [350, 10]?       {}", is_angle_between(350.0, 0.0, 10.0));

    let headings = [350.0, 355.0, 0.0, 5.0];
    match circular_mean(&headings) {
        Ok(mean) => println!("mean heading        = {mean:.3}°"),
        Err(err) => println!("no mean: {err}"),
    }
    if let Ok(std) = circular_std(&headings) {
        println!("circular std        = {:.3}°", std.to_degrees());
    }

    match circular_mean(&[90.0, 270.0]) {
        Ok(mean) => println!("mean of opposites   = {mean}"),
        Err(err) => println!("mean of opposites   : {err}"),
    }
    let lenient = MeanOptions {
        zero_resultant: ZeroResultant::Zero,
        ..MeanOptions::default()
    };
    if let Ok(mean) = circular_mean_with(&[90.0, 270.0], &lenient) {
        println!("lenient mean        = {mean}");
    }

    let day = Circle::of::<clockwork::HourAngle>();
    if let Ok(mean) = day.mean(&[22.0, 23.5, 1.0], &MeanOptions::default()) {
        println!("mean clock time     = {:.2} h", day.wrap_pos(mean));
    }
}
