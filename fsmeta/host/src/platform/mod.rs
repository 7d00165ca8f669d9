cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        pub(crate) use unix::stat_entry;
    } else {
        mod portable;
        pub(crate) use portable::stat_entry;
    }
}
