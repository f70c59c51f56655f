//! Built-in example: two images containing a red circle, one of which the
//! classifier got right.

use sign_eval::{ImageRecord, RecordCollection};

pub fn run() {
    println!("{}", render());
}

fn render() -> String {
    let mut collection = RecordCollection::new();

    let mut first = ImageRecord::new("2123", "red_circle");
    first.add_classification("blue_square");
    first.add_classification("red_circle");
    collection.add(first);

    let mut second = ImageRecord::new("2123", "red_circle");
    second.add_classification("blue_square");
    collection.add(second);

    format!("{:.1}", collection.evaluate_classification_accuracy("red_circle"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_prints_one_decimal() {
        assert_eq!(render(), "50.0");
    }
}
