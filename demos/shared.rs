//! Sharing a Vector across threads.
//!
//! The Vector performs no synchronization of its own; in this example, a Mutex provides the mutual exclusion.
//!
//! -   Several Producer threads push their items into the Vector.
//! -   Once all are done, the main thread sorts the Vector and checks that no item was lost.

extern crate crossbeam_utils;
extern crate ductile;

use std::sync::Mutex;

use ductile::compare::Natural;
use ductile::vector::Vector;

fn main() {
    const NUMBER_PRODUCERS: u32 = 4;
    const NUMBER_ELEMENTS: u32 = 1000;

    let vec: Mutex<Vector<u32>> = Mutex::new(Vector::new());

    crossbeam_utils::thread::scope(|scope| {
        for producer in 0..NUMBER_PRODUCERS {
            let vec = &vec;

            scope.spawn(move |_| {
                for i in 0..NUMBER_ELEMENTS {
                    let value = producer * NUMBER_ELEMENTS + i;
                    vec.lock().unwrap().push(value);
                }
            });
        }
    }).unwrap();

    let mut vec = vec.into_inner().unwrap();

    println!("Collected {} items, capacity {}", vec.len(), vec.capacity());

    vec.sort(&Natural);

    for value in 0..(NUMBER_PRODUCERS * NUMBER_ELEMENTS) {
        assert_eq!(Some(&value), vec.binary_search(&value, &Natural));
    }

    assert_eq!((NUMBER_PRODUCERS * NUMBER_ELEMENTS) as usize, vec.len());
}
