#[cfg(test)]
/// Parser unit tests.
///
/// These cover the trace each construct produces, the symbol-table side effects, and recovery after faults
/// (one diagnostic per problem, no cascades, scopes always closed).
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use crate::lexer;

    fn run(source: &str) -> (ParseReport, SymbolTable) {
        let lexed = lexer::lex(source);
        let mut symbols = SymbolTable::new();
        let report = parse(&lexed.tokens, &mut symbols);
        (report, symbols)
    }

    fn run_with(source: &str, config: &FrontendConfig) -> (ParseReport, SymbolTable) {
        let lexed = lexer::lex(source);
        let mut symbols = SymbolTable::new();
        let report = parse_with_config(&lexed.tokens, &mut symbols, config);
        (report, symbols)
    }

    fn messages(report: &ParseReport) -> Vec<String> {
        report.diagnostics().map(|d| d.message.clone()).collect()
    }

    fn rules(report: &ParseReport) -> Vec<Rule> {
        report.matched().map(|(rule, _)| rule).collect()
    }

    #[test]
    fn function_with_if_else_and_undeclared_condition() {
        let (report, symbols) = run("NOReturn main() { IfTrue (x) { Turnback 1; } Otherwise { Turnback 0; } }");
        insta::assert_snapshot!(report.to_string(), @r"
        Line : 1 Matched    Rule used: fun-declaration
        Line : 1 Not Matched    Error: Variable 'x' not declared before use (line 1)
        Line : 1 Matched    Rule used: Return Statement
        Line : 1 Matched    Rule used: Block
        Line : 1 Matched    Rule used: Return Statement
        Line : 1 Matched    Rule used: Block
        Line : 1 Matched    Rule used: If/Else Statement
        Total NO of errors: 1
        ");
        assert_eq!(report.count(Severity::Semantic), 1);
        let function_scopes = symbols
            .history()
            .filter(|kind| matches!(kind, ScopeKind::Function(_)))
            .count();
        assert_eq!(function_scopes, 1);
        assert_eq!(symbols.depth(), 0);
        assert!(symbols.function_exists("main"));
    }

    #[test]
    fn duplicate_name_in_one_declaration() {
        let (report, symbols) = run("Imw a, a;");
        assert_eq!(
            report.trace,
            vec![
                TraceEntry::Matched {
                    rule: Rule::Declaration,
                    line: 1
                },
                TraceEntry::Error(errors::already_declared("a", 1, Span::new(7, 8))),
            ]
        );
        assert_eq!(report.iterations, 1);
        assert_eq!(symbols.get_variable_type("a"), Ok(PrimitiveType::Integer));
    }

    #[test]
    fn malformed_factor_synchronizes_to_next_statement() {
        let (report, symbols) = run("Imw y = (1 + ;\nImw z;");
        let diagnostics: Vec<_> = report.diagnostics().collect();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Syntax);
        assert_eq!(diagnostics[0].message, "Expected expression factor");
        assert_eq!(diagnostics[0].hints, vec!["found ';'".to_string()]);
        assert_eq!(report.matched().collect::<Vec<_>>(), vec![(Rule::Declaration, 2)]);
        assert!(!symbols.exists("y"));
        assert!(symbols.exists("z"));
    }

    #[test]
    fn unmatched_paren_inside_block_keeps_block_closing() {
        let (report, symbols) = run("NOReturn f() { Imw x = (1 }\nImw after;");
        assert_eq!(messages(&report), vec!["Expected ')'"]);
        assert_eq!(
            report.matched().collect::<Vec<_>>(),
            vec![(Rule::FunctionDeclaration, 1), (Rule::Declaration, 2)]
        );
        assert!(symbols.exists("after"));
        assert_eq!(symbols.depth(), 0);
    }

    #[test]
    fn fault_in_function_body_does_not_leak_scope() {
        let (report, symbols) = run("NOReturn f() { Imw a = (; Imw b; }\nImw c;");
        assert_eq!(messages(&report), vec!["Expected expression factor"]);
        assert!(symbols.exists("c"));
        assert!(!symbols.exists("b"));
        assert_eq!(symbols.depth(), 0);
    }

    #[test]
    fn valid_program_traces_every_statement() {
        let source = "\
Imw total = 0;
Imw add(Imw a, Imw b) {
    Turnback a + b;
}
NOReturn main() {
    Imw i = 0;
    RepeatWhen (i < 10) {
        IfTrue (i == 5) OutLoop;
        total = add(total, i);
        i = i + 1;
    }
    Turnback;
}
";
        let (report, symbols) = run(source);
        assert_eq!(report.error_count(), 0, "{report}");
        assert_eq!(
            report.matched().collect::<Vec<_>>(),
            vec![
                (Rule::Declaration, 1),
                (Rule::FunctionDeclaration, 2),
                (Rule::Return, 3),
                (Rule::FunctionDeclaration, 5),
                (Rule::Declaration, 6),
                (Rule::Break, 8),
                (Rule::If, 8),
                (Rule::Assignment, 9),
                (Rule::Assignment, 10),
                (Rule::Block, 7),
                (Rule::Loop, 7),
                (Rule::Return, 12),
            ]
        );
        assert!(!report.halted);
        assert_eq!(
            symbols.get_function_signature("add").map(|s| s.parameter_types.clone()),
            Ok(vec![PrimitiveType::Integer, PrimitiveType::Integer])
        );
        assert!(!symbols.exists("i"));
    }

    #[test]
    fn comments_are_matched_productions() {
        let (report, _) = run("/^ hello\n/@ one\n two @/\nImw x;");
        assert_eq!(
            report.matched().collect::<Vec<_>>(),
            vec![
                (Rule::Comment, 1),
                (Rule::Comment, 2),
                (Rule::CommentPart, 2),
                (Rule::CommentPart, 3),
                (Rule::CommentEnd, 3),
                (Rule::Declaration, 4),
            ]
        );
    }

    #[test]
    fn literal_type_checks() {
        let source = "\
Imw a = 'c';
Chj c = 'x';
IMwf f = 5;
SIMw s = -3;
Series t = \"hi\";
a = 2.5;
Imw b = (5) + 'c';
";
        let (report, _) = run(source);
        assert_eq!(
            messages(&report),
            vec![
                "Type mismatch: cannot assign character literal to 'a' of type Integer",
                "Type mismatch: cannot assign integer literal to 'f' of type Float",
                "Type mismatch: cannot assign float literal to 'a' of type Integer",
            ]
        );

        let lexed = lexer::lex(source);
        let mut symbols = SymbolTable::new();
        let config = FrontendConfig::default().with_literal_type_checks(false);
        let unchecked = parse_with_config(&lexed.tokens, &mut symbols, &config);
        assert_eq!(unchecked.error_count(), 0);
    }

    #[test]
    fn assignment_to_undeclared_name() {
        let (report, _) = run("Imw f(Imw p) { Imw local; local = p; }\nlocal = 1;");
        assert_eq!(messages(&report), vec!["Variable 'local' not declared before use (line 2)"]);
        assert_eq!(rules(&report).last(), Some(&Rule::Assignment));
    }

    #[test]
    fn calls_are_checked_against_signatures() {
        let source = "\
Imw g(Imw a, Imw b) { Turnback a + b; }
Imw r = g(1);
r = h(2);
r = g(1, 2);
Imw fact(Imw n) { IfTrue (n <= 1) Turnback 1; Turnback n * fact(n - 1); }
";
        let (report, _) = run(source);
        assert_eq!(
            messages(&report),
            vec!["Function 'g' expects 2 argument(s), found 1", "Function 'h' not declared"]
        );
    }

    #[test]
    fn variables_and_functions_share_a_namespace() {
        let (report, _) = run("Imw f() { Turnback 1; }\nImw f;");
        assert_eq!(messages(&report), vec!["'f' is already declared as a function (line 2)"]);

        let (report, _) = run("NOReturn f() { }\nNOReturn f() { }");
        assert_eq!(messages(&report), vec!["Function 'f' already declared (line 2)"]);
        assert_eq!(rules(&report), vec![Rule::FunctionDeclaration, Rule::FunctionDeclaration]);
    }

    #[test]
    fn break_needs_an_enclosing_loop() {
        let (report, _) = run("OutLoop;\nReiterate (1) { OutLoop; }");
        assert_eq!(messages(&report), vec!["Break statement outside of a loop"]);
        assert_eq!(rules(&report), vec![Rule::Break, Rule::Break, Rule::Block, Rule::Loop]);

        let (report, _) = run("RepeatWhen (1) { NOReturn inner() { OutLoop; } }");
        assert_eq!(messages(&report), vec!["Break statement outside of a loop"]);
    }

    #[test]
    fn dangling_otherwise_binds_to_nearest_if() {
        let (report, _) = run("Imw x = 1; IfTrue (x > 0) IfTrue (x > 1) x = 2; Otherwise x = 3;");
        assert_eq!(report.error_count(), 0);
        assert_eq!(
            rules(&report),
            vec![Rule::Declaration, Rule::Assignment, Rule::Assignment, Rule::IfElse, Rule::If]
        );
    }

    #[test]
    fn otherwise_without_if_still_parses_its_branch() {
        let (report, _) = run("Otherwise { Imw a; }");
        assert_eq!(messages(&report), vec!["'Otherwise' without matching 'IfTrue'"]);
        assert_eq!(rules(&report), vec![Rule::Declaration, Rule::Block]);
    }

    #[test]
    fn void_variables_are_rejected() {
        let (report, symbols) = run("NOReturn v;");
        assert_eq!(messages(&report), vec!["Variable 'v' cannot have type Void"]);
        assert!(!symbols.exists("v"));
    }

    #[test]
    fn missing_tokens_are_reported_and_assumed() {
        let (report, symbols) = run("Imw x 5;\nImw a = 1\nImw b;");
        assert_eq!(messages(&report), vec!["Expected '=' after variable name", "Expected ';'"]);
        assert!(symbols.exists("x"));
        assert!(symbols.exists("a"));
        assert!(symbols.exists("b"));
    }

    #[test]
    fn signed_literal_after_operand_is_subtraction() {
        let (report, _) = run("Imw a = 1;\nImw b = a -1;\nIMwf c = 2.0 +0.5;");
        assert_eq!(report.error_count(), 0, "{report}");
        assert_eq!(rules(&report), vec![Rule::Declaration; 3]);
    }

    #[test]
    fn unary_not_and_logical_operators() {
        let (report, _) = run("Imw t = ~(1 < 2) && 1 || 0;\nt;");
        assert_eq!(report.error_count(), 0, "{report}");
        assert_eq!(rules(&report), vec![Rule::Declaration, Rule::ExpressionStatement]);
    }

    #[test]
    fn struct_declarations_are_recognized_only() {
        let (report, symbols) = run("Loli point { Imw x; IMwf y, z; };\nImw x;");
        assert_eq!(report.error_count(), 0, "{report}");
        assert_eq!(rules(&report), vec![Rule::StructDeclaration, Rule::Declaration]);
        assert!(!symbols.exists("y"));
    }

    #[test]
    fn invalid_tokens_are_skipped() {
        let (report, symbols) = run("3x = 1;\nImw y;");
        assert_eq!(report.error_count(), 0);
        assert_eq!(rules(&report), vec![Rule::Declaration]);
        assert!(symbols.exists("y"));
    }

    #[test]
    fn unexpanded_include_is_reported() {
        let (report, symbols) = run("Include <lib.r7>\nImw y;");
        assert_eq!(messages(&report), vec!["Include 'lib.r7' was not expanded"]);
        assert!(symbols.exists("y"));
    }

    #[test]
    fn stray_close_brace_at_top_level() {
        let (report, _) = run("}\nImw a;");
        assert_eq!(messages(&report), vec!["Unexpected '}'"]);
        assert_eq!(rules(&report), vec![Rule::Declaration]);
    }

    #[test]
    fn empty_statements() {
        let (report, _) = run(";;");
        assert_eq!(rules(&report), vec![Rule::EmptyStatement, Rule::EmptyStatement]);
    }

    #[test]
    fn iteration_guard_halts_with_one_diagnostic() {
        let lexed = lexer::lex("Imw a; Imw b;");
        let mut symbols = SymbolTable::new();
        let config = FrontendConfig::default();
        let mut parser = Parser::new(&lexed.tokens, &mut symbols, config.clone());
        parser.iterations = config.iteration_limit(lexed.tokens.len());

        let report = parser.parse();
        assert!(report.halted);
        assert_eq!(report.error_count(), 1);
        assert!(messages(&report)[0].starts_with("Parser stuck"));
    }

    #[test]
    fn tokens_without_eof_still_terminate() {
        let mut lexed = lexer::lex("Imw a = (");
        lexed.tokens.pop();
        let mut symbols = SymbolTable::new();
        let report = parse(&lexed.tokens, &mut symbols);
        assert_eq!(messages(&report), vec!["Expected expression factor"]);
        assert!(!report.halted);
    }

    #[test]
    fn fault_in_then_branch_keeps_its_otherwise() {
        let (report, _) = run("Imw x; Imw y; IfTrue (x) y = (; Otherwise y = 2;");
        assert_eq!(messages(&report), vec!["Expected expression factor"]);
        assert_eq!(
            rules(&report),
            vec![Rule::Declaration, Rule::Declaration, Rule::Assignment, Rule::IfElse]
        );

        let (report, _) = run("Imw x; IfTrue (x) x = 1 + Otherwise x = 2;");
        assert_eq!(messages(&report), vec!["Expected expression factor"]);
        assert_eq!(rules(&report).last(), Some(&Rule::IfElse));
    }

    #[test]
    fn function_name_is_not_a_value() {
        let (report, _) = run("Imw f() { Turnback 1; }\nImw z = f;\nz = f();");
        let diagnostics: Vec<_> = report.diagnostics().collect();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Variable 'f' not declared before use (line 2)");
        assert_eq!(diagnostics[0].hints, vec!["'f' is a function; call it as f(...)".to_string()]);
    }

    #[test]
    fn nesting_limit_is_inclusive() {
        let config = FrontendConfig::new().with_max_nesting(3);
        let (report, symbols) = run_with("{{{}}}", &config);
        assert_eq!(report.error_count(), 0);
        assert_eq!(rules(&report), vec![Rule::Block; 3]);
        assert_eq!(symbols.depth(), 0);

        let (report, symbols) = run_with("{{{{ Imw hidden; }}}} Imw after;", &config);
        assert_eq!(messages(&report), vec!["Nesting deeper than 3 levels"]);
        assert_eq!(
            rules(&report),
            vec![Rule::Block, Rule::Block, Rule::Block, Rule::Declaration]
        );
        assert_eq!(symbols.depth(), 0);
        assert!(symbols.exists("after"));
        assert!(!symbols.exists("hidden"));
    }

    #[test]
    fn deeply_nested_braces_are_cut_off_once() {
        let n = 100_000;
        let source = format!("{}{}", "{".repeat(n), "}".repeat(n));
        let (report, symbols) = run(&source);
        assert_eq!(messages(&report), vec!["Nesting deeper than 256 levels"]);
        assert!(!report.halted);
        assert_eq!(rules(&report).len(), 256);
        assert_eq!(symbols.depth(), 0);
    }

    #[test]
    fn deeply_nested_parens_are_cut_off_once() {
        let n = 100_000;
        let source = format!("Imw x = {}1{};\nx = 2;", "(".repeat(n), ")".repeat(n));
        let (report, _) = run(&source);
        assert_eq!(messages(&report), vec!["Nesting deeper than 256 levels"]);
        assert_eq!(rules(&report), vec![Rule::Declaration, Rule::Assignment]);

        let source = format!("Imw f(Imw a) {{ Turnback a; }}\nf({}1{});", "f(".repeat(n), ")".repeat(n));
        let (report, _) = run(&source);
        assert_eq!(messages(&report), vec!["Nesting deeper than 256 levels"]);
    }

    #[test]
    fn deeply_nested_branches_and_negations() {
        let n = 100_000;
        let source = format!("Imw x = 1;\n{}x = 2;\nx = 3;", "IfTrue (x) ".repeat(n));
        let (report, symbols) = run(&source);
        assert_eq!(messages(&report), vec!["Nesting deeper than 256 levels"]);
        assert_eq!(rules(&report).last(), Some(&Rule::Assignment));
        assert_eq!(symbols.depth(), 0);

        let source = format!("Imw x = 1;\nx = {}x;", "~".repeat(n));
        let (report, _) = run(&source);
        assert_eq!(report.error_count(), 0);
    }
}
