use std::time::Duration;

pub struct X {
    #[cfg_attr(any(), btest)]
    a: i32,
    #[cfg_attr(any(), btest)]
    B: i32,
    #[cfg_attr(any(), btest(opt))]
    c: i32,
    #[cfg_attr(any(), btest(ignore))]
    d: i32,
    #[cfg_attr(any(), btest)]
    e: Duration,
    #[cfg_attr(any(), btest)]
    f: Vec<(Vec<i32>, [u8; 4])>,
}

struct y {
    #[cfg_attr(any(), btest)]
    a: String,
    b: String,
}

pub struct Z {
    a: String,
}
