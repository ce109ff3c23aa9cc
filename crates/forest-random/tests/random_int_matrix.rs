use forest_random::{MinStdRandom, RandomInt, UniformRandom};
use proptest::prelude::*;

proptest! {
    #[test]
    fn uniform_random_int_respects_bounds(seed in any::<u64>(), a in -1_000i64..1_000, b in -1_000i64..1_000) {
        let mut random = UniformRandom::with_seed(seed);
        let (lo, hi) = (a.min(b), a.max(b));
        for _ in 0..16 {
            let n = random.random_int(a, b);
            prop_assert!(lo <= n && n <= hi);
        }
    }

    #[test]
    fn min_std_never_leaves_its_range(seed in any::<i32>()) {
        let mut random = MinStdRandom::new(seed);
        for _ in 0..16 {
            let n = random.random_int();
            prop_assert!(n >= 1 && n < i32::MAX);
        }
    }

    #[test]
    fn seeded_sources_replay(seed in any::<u64>()) {
        let mut a = UniformRandom::with_seed(seed);
        let mut b = UniformRandom::with_seed(seed);
        let xs: Vec<u32> = (0..8).map(|_| a.next_int()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.next_int()).collect();
        prop_assert_eq!(xs, ys);
    }
}

fn draw<R: RandomInt>(mut random: R, n: usize) -> Vec<u32> {
    (0..n).map(|_| random.next_int()).collect()
}

#[test]
fn boxed_and_borrowed_sources_delegate() {
    let expected = draw(MinStdRandom::new(99), 4);

    let mut inner = MinStdRandom::new(99);
    assert_eq!(draw(&mut inner, 4), expected);

    let boxed: Box<dyn RandomInt> = Box::new(MinStdRandom::new(99));
    assert_eq!(draw(boxed, 4), expected);
}
