use std::time::Duration;

pub struct X {
    #[btest]
    a: i32,
    #[btest]
    B: i32,
    #[btest(opt)]
    c: i32,
    #[btest(ignore)]
    d: i32,
    #[btest]
    e: Duration,
    #[btest]
    f: Vec<(Vec<i32>, [u8; 4])>,
}

struct y {
    #[btest]
    a: String,
    b: String,
}

pub struct Z {
    a: String,
}
