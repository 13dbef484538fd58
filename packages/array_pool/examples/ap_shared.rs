//! Using the shared per-thread pools, which need no setup.

fn main() {
    for line in ["alpha", "beta", "gamma"] {
        let mut scratch = array_pool::shared::acquire::<String>();
        scratch.push_str(line);
        scratch.make_ascii_uppercase();

        println!("{scratch}");

        let pooled = array_pool::shared::release(scratch);
        println!("Shared string pool holds {pooled} item(s)");
    }
}
