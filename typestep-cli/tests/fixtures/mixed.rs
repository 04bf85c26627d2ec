pub struct Fill {
    #[cfg_attr(any(), builder)]
    qty: u32,
}

pub struct Wrapper<T> {
    #[cfg_attr(any(), builder)]
    inner: T,
}
