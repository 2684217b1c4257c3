use dedupage::{Pager, View, dedup};

// deterministic stand-in for a real address generator: a base list of
// unique addresses with every third entry replaced by a repeat of an
// earlier one
fn generate(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            if i % 3 == 2 {
                format!("guy{}@gmail.com", i / 3)
            } else {
                format!("guy{}@gmail.com", i)
            }
        })
        .collect()
}

fn print_view(label: &str, view: View<String>) {
    match view {
        View::NoData => println!("{label}: not generated"),
        View::Page(p) => {
            println!("{label} ({} pages):", p.page_count);
            for email in p.items {
                println!("  {email}");
            }
        }
    }
}

fn main() {
    let mut input_pager = Pager::new(10).expect("page size is positive");
    let output_pager = Pager::new(10).expect("page size is positive");

    // before anything is generated both sides render a placeholder
    print_view("input", input_pager.view(None::<&[String]>));

    let input = generate(50_000);
    let output = dedup(&input);
    println!(
        "generated {} addresses, {} unique",
        input.len(),
        output.len()
    );

    print_view("input page 0", input_pager.view(Some(&input[..])));
    print_view("output page 0", output_pager.view(Some(&output[..])));

    // page forward through the raw list, far past the end on purpose, the
    // view clamps to the last page
    input_pager.select(1);
    print_view("input page 1", input_pager.view(Some(&input[..])));
    input_pager.select(usize::MAX);
    print_view("input last page", input_pager.view(Some(&input[..])));
}
