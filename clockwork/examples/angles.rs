//! Angle helpers example: wrapping, sector tests and separation in a single unit type.

use clockwork::{Degrees, HourAngles, Radians};

fn main() {
    let a = Degrees::new(370.0).wrap_signed();
    assert_eq!(a.value(), 10.0);

    let s = Degrees::new(45.0).abs_separation(Degrees::new(350.0));
    assert_eq!(s.value(), 55.0);

    let north = Degrees::new(2.0);
    assert!(north.is_between(Degrees::new(340.0), Degrees::new(20.0)));
    assert!(!north.is_between(Degrees::new(20.0), Degrees::new(340.0)));

    let ra = HourAngles::new(25.5).wrap_pos();
    assert_eq!(ra.value(), 1.5);

    let rad: Radians = Degrees::new(-90.0).to();
    println!("-90° is {}", rad.wrap_pos());
}
