use kwrule::compile;

fn main() {
    let expressions = [
        "(警情 / 舆情) + 互联网\\+",
        "数据泄露 + (官方 / 声明)",
        "(A",
    ];

    for expr in expressions {
        println!("expression: {expr}");
        match compile(expr) {
            Ok(tree) => println!("{}\n", serde_json::to_string_pretty(&tree).unwrap()),
            Err(err) => println!("invalid: {err}\n"),
        }
    }
}
