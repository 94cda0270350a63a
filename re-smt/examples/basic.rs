use re_smt::{translate, Anchoring};
use re_smt_term::ReBuilder;

fn main() {
    let tagged = translate(&ReBuilder).call("/^a{2,3}$/").unwrap();
    assert!(tagged.term.is_match("aaa"));
    assert!(tagged.term.is_match("aaaa") == false);
    println!("{}\n  {}", tagged.label, tagged.term);

    // Unanchored ends may be surrounded by any line
    let tagged = translate(&ReBuilder)
        .anchoring(Anchoring::Surround)
        .call(r"/\d+px/g")
        .unwrap();
    assert!(tagged.term.is_match("width: 12px;"));
    println!("{}\n  {}", tagged.label, tagged.term);

    match translate(&ReBuilder).call("/a||b/") {
        Ok(_) => unreachable!(),
        Err(e) => println!("/a||b/\n  {e}"),
    }
}
