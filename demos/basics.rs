//! A tour of the Vector.
//!
//! Records a handful of fixed-size readings, de-duplicates them by sensor, then sorts and searches them, printing the
//! capacity as it evolves.

extern crate ductile;

use ductile::compare::Equal;
use ductile::vector::Vector;

#[derive(Clone, Copy, Debug)]
struct Reading {
    sensor: u16,
    value: i32,
}

fn by_sensor(a: &Reading, b: &Reading) -> std::cmp::Ordering { a.sensor.cmp(&b.sensor) }

fn main() {
    let mut readings: Vector<Reading> = Vector::new();

    for (sensor, value) in [(3, 12), (1, -4), (3, 15), (7, 0), (1, 2)] {
        let reading = Reading { sensor, value };

        //  Only the first reading of each sensor is kept.
        let kept = *readings.linear_search_or_insert(reading, &Equal(by_sensor));

        println!("Sensor {} keeps {}, capacity {}", reading.sensor, kept.value, readings.capacity());
    }

    readings.sort(&by_sensor);
    println!("Sorted: {:?}", readings);

    let key = Reading { sensor: 3, value: 0 };
    println!("Sensor 3: {:?}", readings.binary_search(&key, &by_sensor));

    readings.shrink();
    println!("Shrunk: capacity {}", readings.capacity());

    while let Some(reading) = readings.pop() {
        println!("Popped {:?}", reading);
    }

    readings.release();
    assert_eq!(0, readings.capacity());
}
