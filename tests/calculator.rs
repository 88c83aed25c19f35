use smartcalc::{
    error::{CommandError, ExpressionError},
    interpreter::{
        evaluate_line,
        evaluator::core::evaluate,
        lexer::{Token, normalize, tokenize},
        parser::core::transform,
        value::core::Value,
        variables::Variables,
    },
    rpn::{BinaryOperator, PostfixItem, display_postfix},
    run_script,
    session::{Response, Session},
};

fn int(n: i64) -> Value {
    Value::from(n)
}

fn eval(src: &str) -> Result<Value, ExpressionError> {
    evaluate_line(src, &Variables::new())
}

fn assert_value(src: &str, expected: Value) {
    match eval(src) {
        Ok(value) => assert_eq!(value, expected, "{src}"),
        Err(e) => panic!("Expression {src:?} failed: {e:?}"),
    }
}

fn assert_prints(src: &str, expected: &str) {
    match eval(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "{src}"),
        Err(e) => panic!("Expression {src:?} failed: {e:?}"),
    }
}

fn assert_error(src: &str, expected: &ExpressionError) {
    match eval(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "{src}"),
    }
}

fn postfix_of(src: &str, variables: &Variables) -> String {
    let tokens = tokenize(src).unwrap();
    display_postfix(&transform(&tokens, variables).unwrap())
}

#[test]
fn operators_split_words_regardless_of_spacing() {
    assert_eq!(normalize("  2+3*(x -4)^2  ").unwrap(), "2 + 3 * ( x - 4 ) ^ 2");
    assert_eq!(normalize("a=--b").unwrap(), "a = - - b");
    assert_eq!(tokenize("12ab 3.5").unwrap(),
               vec![Token::Word("12ab".into()), Token::Word("3.5".into())]);
    assert!(tokenize("   ").unwrap().is_empty());
}

#[test]
fn leading_signs_multiply() {
    for literal in [0_i64, 7, 123] {
        for count in 0..6 {
            let mut src = String::new();
            for i in 0..count {
                src.push_str(if i % 2 == 0 { "- " } else { "+ - " });
            }
            src.push_str(&literal.to_string());

            let sign = if count % 2 == 0 { 1 } else { -1 };
            assert_value(&src, int(sign * literal));
        }
    }
}

#[test]
fn plus_signs_are_identity() {
    assert_value("+ + + 4", int(4));
    assert_value("-+-+4", int(4));
}

#[test]
fn precedence_orders_operators() {
    assert_value("2 + 3 * 4", int(14));
    assert_value("(2 + 3) * 4", int(20));
    assert_value("2 * 3 ^ 2", int(18));
    assert_eq!(postfix_of("2 + 3 * 4", &Variables::new()), "2 3 4 * +");
    assert_eq!(postfix_of("(2 + 3) * 4", &Variables::new()), "2 3 + 4 *");
}

#[test]
fn equal_precedence_groups_left_including_power() {
    assert_value("2 ^ 3 ^ 2", int(64));
    assert_value("10 - 4 - 3", int(3));
    assert_value("100 / 10 / 5", int(2));
    assert_eq!(postfix_of("2 ^ 3 ^ 2", &Variables::new()), "2 3 ^ 2 ^");
}

#[test]
fn operand_order_is_preserved() {
    assert_value("2 - 5", int(-3));
    assert_value("3 / 4", Value::Real(0.75));
    assert_value("2 ^ 5", int(32));
}

#[test]
fn unbalanced_parentheses_are_invalid() {
    assert_error("(1 + 2", &ExpressionError::InvalidExpression);
    assert_error("1 + 2)", &ExpressionError::InvalidExpression);
    assert_error("((1)", &ExpressionError::InvalidExpression);
    assert_error(")(", &ExpressionError::InvalidExpression);
}

#[test]
fn misplaced_operands_and_operators_are_invalid() {
    assert_error("3 4", &ExpressionError::InvalidExpression);
    assert_error("2 * / 3", &ExpressionError::InvalidExpression);
    assert_error("2 +", &ExpressionError::InvalidExpression);
    assert_error("^ 2", &ExpressionError::InvalidExpression);
    assert_error("(2) 3", &ExpressionError::InvalidExpression);
    assert_error("", &ExpressionError::InvalidExpression);
    assert_error("2 = 2", &ExpressionError::InvalidExpression);
    assert_error("a_b", &ExpressionError::InvalidExpression);
}

#[test]
fn sign_before_parenthesis_is_invalid() {
    assert_error("- ( 3 + 2 )", &ExpressionError::InvalidExpression);
    assert_error("2 * +(1)", &ExpressionError::InvalidExpression);
}

#[test]
fn unknown_variable_is_reported_with_its_name() {
    assert_error("x + 1", &ExpressionError::UnknownVariable { name: "x".into() });
    assert_eq!(eval("x + 1").unwrap_err().to_string(), "Unknown variable");
}

#[test]
fn mixed_words_are_invalid_identifiers() {
    assert_error("a1 + 2", &ExpressionError::InvalidIdentifier);
    assert_error("2 + 3b", &ExpressionError::InvalidIdentifier);
    assert_eq!(eval("a1").unwrap_err().to_string(), "Invalid identifier");
}

#[test]
fn integral_results_are_integers() {
    assert_value("10 / 2", int(5));
    assert_eq!(eval("10 / 2").unwrap().to_string(), "5");
    assert_value("5 / 2 * 4", int(10));
    assert_value("1 / 2", Value::Real(0.5));
    assert_eq!(eval("1 / 2").unwrap().to_string(), "0.5");
}

#[test]
fn integers_are_exact_at_any_size() {
    assert_prints("12345678901234567890 + 1", "12345678901234567891");
    assert_prints("9223372036854775807 + 1", "9223372036854775808");
    assert_prints("0 - 9223372036854775808 - 1", "-9223372036854775809");
    assert_prints("99999999999999999999 * 99999999999999999999",
                  "9999999999999999999800000000000000000001");
    assert_prints("3 ^ 50", "717897987691852588770249");
    assert_prints("2 ^ 64", "18446744073709551616");
    assert_prints("(2 ^ 64) / (2 ^ 32)", "4294967296");
    assert_prints("10 ^ 400", &format!("1{}", "0".repeat(400)));
    assert!(matches!(eval("2 ^ 64"), Ok(Value::Integer(_))));
}

#[test]
fn small_bases_raise_to_any_power() {
    assert_value("1 ^ 100000000000000000000", int(1));
    assert_value("(0 - 1) ^ 100000000000000000001", int(-1));
    assert_value("(0 - 1) ^ 100000000000000000000", int(1));
    assert_value("0 ^ 100000000000000000000", int(0));
    assert_value("0 ^ 0", int(1));
}

#[test]
fn reals_print_in_shortest_form() {
    assert_prints("1 / 3", "0.3333333333333333");
    assert_prints("1 / 10000", "0.0001");
    assert_prints("1 / 3000000", "3.3333333333333335e-07");
    assert_prints("2 ^ -20", "9.5367431640625e-07");
    assert_prints("10 ^ 20 / 3", "3.333333333333333e+19");
    assert_prints("2 ^ 64 / 3", "6.148914691236517e+18");
    assert_prints("0 - 10 ^ 20 / 7", "-1.4285714285714287e+19");
}

#[test]
fn arithmetic_faults_are_classified() {
    assert_error("1 / 0", &ExpressionError::DivisionByZero);
    assert_error("1 / (2 - 2)", &ExpressionError::DivisionByZero);
    assert_error("0 ^ -2", &ExpressionError::DivisionByZero);
    assert_error("(0 - 8) ^ (1 / 3)", &ExpressionError::NonRealResult);
    assert_error("2 ^ 10000000000", &ExpressionError::Overflow);
    assert_error("10 ^ 400 / 3", &ExpressionError::Overflow);
    assert_error("(1 / 2) ^ (10 ^ 400)", &ExpressionError::Overflow);
}

#[test]
fn evaluator_rejects_malformed_postfix() {
    assert_eq!(evaluate(&[]), Err(ExpressionError::InvalidExpression));
    assert_eq!(evaluate(&[PostfixItem::Operand(int(1)),
                          PostfixItem::Operator(BinaryOperator::Add)]),
               Err(ExpressionError::InvalidExpression));
    assert_eq!(evaluate(&[PostfixItem::Operand(int(1)),
                          PostfixItem::Operand(int(2))]),
               Err(ExpressionError::InvalidExpression));
}

#[test]
fn variables_resolve_with_folded_signs() {
    let mut variables = Variables::new();
    variables.set("n", int(6));
    variables.set("half", Value::Real(0.5));

    assert_eq!(postfix_of("- n * 2", &variables), "-6 2 *");
    assert_eq!(evaluate_line("n * half", &variables), Ok(int(3)));
    assert_eq!(evaluate_line("- - n - half", &variables), Ok(Value::Real(5.5)));
    assert_eq!(evaluate_line("N", &variables),
               Err(ExpressionError::UnknownVariable { name: "N".into() }));
}

#[test]
fn assignment_round_trip() {
    let mut session = Session::new();
    assert_eq!(session.process_line("x = 4 + 5"), Response::Nothing);
    assert_eq!(session.process_line("x * 2"), Response::Output("18".into()));
    assert_eq!(session.variables().get("x"), Some(int(9)));
    assert_eq!(session.process_line("/variables"), Response::Output("x: 9".into()));
}

#[test]
fn reassignment_keeps_listing_order() {
    let mut session = Session::new();
    session.process_line("b = 1");
    session.process_line("a = 2");
    session.process_line("b = a / 4");

    let listed: Vec<_> = session.variables().iter().collect();
    assert_eq!(listed, vec![("b", &Value::Real(0.5)), ("a", &int(2))]);
    assert_eq!(session.process_line("/variables"), Response::Output("b: 0.5\na: 2".into()));
}

#[test]
fn failed_assignments_store_nothing() {
    let mut session = Session::new();
    assert_eq!(session.process_line("a1 = 3"), Response::Error(CommandError::InvalidIdentifier));
    assert_eq!(session.process_line("a = 3 +"), Response::Error(CommandError::InvalidAssignment));
    assert_eq!(session.process_line("a = b2"), Response::Error(CommandError::InvalidAssignment));
    assert_eq!(session.process_line("a = b"),
               Response::Error(CommandError::Expression(ExpressionError::UnknownVariable { name: "b".into() })));
    assert_eq!(session.process_line("a = 1 / 0"),
               Response::Error(CommandError::Expression(ExpressionError::DivisionByZero)));
    assert!(session.variables().is_empty());
}

#[test]
fn commands_are_dispatched() {
    let mut session = Session::new();
    assert_eq!(session.process_line(""), Response::Nothing);
    assert_eq!(session.process_line("   "), Response::Nothing);
    assert_eq!(session.process_line("/variables"), Response::Output(String::new()));
    assert_eq!(session.process_line("/exit"), Response::Exit);
    assert_eq!(session.process_line("/exit "),
               Response::Error(CommandError::UnknownCommand { command: "/exit ".into() }));
    let help = session.process_line("/help").text().unwrap();
    assert!(help.contains("/variables"));
    assert!(help.contains("integer division '/'"));
    assert_eq!(session.process_line("/go").text(), Some("Unknown command".into()));
}

#[test]
fn scripts_stop_at_exit() {
    assert_eq!(run_script("1 + 1\n/exit\n2 + 2"), vec!["2", "Bye!"]);
    assert_eq!(run_script("v = 2\nv ^ 10\n"), vec!["1024", "Bye!"]);
    assert_eq!(run_script(""), vec!["Bye!"]);
    assert_eq!(run_script("/variables\nx = 1\n/variables"), vec!["", "x: 1", "Bye!"]);
}
