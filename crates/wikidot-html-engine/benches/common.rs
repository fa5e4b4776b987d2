// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_wikidot_content(size: usize) -> String {
    let base = concat!(
        "+ Title\n\n++ Section\n\n",
        "Paragraph with //some// **formatted** content and a [[[link|link]]].\n\n",
        "* Bullet point\n** Nested item\n* Another item\n\n",
        "||~ Name||~ Value||\n||a||##blue|b##||\n\n",
        "> quoted --text-- _\ncontinued\n\n----\n\n",
    );
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_formatting(depth: usize) -> String {
    let markers = ["**", "//", "__", "--", ",,", "^^"];
    let mut line = String::new();
    for i in 0..depth {
        line.push_str(markers[i % markers.len()]);
        line.push_str("word ");
    }
    for i in (0..depth).rev() {
        line.push_str("end");
        line.push_str(markers[i % markers.len()]);
        line.push(' ');
    }
    line
}
