//! "Language Overview" section: program structure, types, collections, generics, errors.

use super::{cat, doc, ex, exd, sect};
use crate::raw::RawSection;

pub(super) fn section() -> RawSection {
    sect(
        "Language Overview",
        vec![
            program_structure(),
            variables_and_types(),
            collections_and_iteration(),
            composite_data_types(),
            generics(),
            error_handling(),
        ],
    )
}

fn program_structure() -> crate::raw::RawCategory {
    cat(
        "Program Structure & Syntax",
        vec![
            doc(
                "main function",
                "fn main() { ... }",
                "The entry point for every Ren program. Execution starts here.",
                vec![
                    ex("import lib/std\n\nfn main() {\n    print(\"Hello, world!\\n\");\n}"),
                    exd("ren hello.re\n./out", "To build and run:"),
                ],
            ),
            doc(
                "import",
                "import <path>",
                "Imports another Ren file, bringing its public functions and types into the current namespace. The path is relative and the `.re` extension is omitted.",
                vec![
                    exd(
                        "// in file: my_lib.re\npub fn say_hi() {\n    print(\"Hi from my_lib!\\n\");\n}",
                        "Define a public function in `my_lib.re`.",
                    ),
                    exd(
                        "// in file: main.re\nimport my_lib\n\nfn main() {\n    say_hi(); // a direct call\n}",
                        "Import `my_lib.re` and call its public function directly without a namespace qualifier.",
                    ),
                ],
            ),
        ],
    )
}

fn variables_and_types() -> crate::raw::RawCategory {
    cat(
        "Variables & Types",
        vec![
            doc(
                "let (Variable Declaration)",
                "let <name>: <type> = <value>",
                "Declares a variable. The basic types are `int`, `char`, and `bool`.",
                vec![exd(
                    "let my_int = 5;\nlet my_char = 'a';\nlet my_bool = true;",
                    "The type is inferred if not specified.",
                )],
            ),
            doc(
                "<char> (String Slice)",
                "\"a string literal\"",
                "A string slice is an immutable view into a sequence of characters. String literals create slices.",
                vec![exd(
                    "let name: <char> = \"Ren\";",
                    "String slices are immutable and cannot be modified directly.",
                )],
            ),
            doc(
                "[char] (String List)",
                "+\"a string literal\"",
                "A string list is a mutable, heap-allocated list of characters. The `+` operator copies a slice to the heap to create a list.",
                vec![
                    exd(
                        "let greeting: [char] = +\"Hello\";",
                        "Create a mutable string by copying a slice to the heap.",
                    ),
                    exd(
                        "push(&greeting, '!');\nprint(greeting);",
                        "The list can then be modified. This will print 'Hello!'.",
                    ),
                ],
            ),
        ],
    )
}

fn collections_and_iteration() -> crate::raw::RawCategory {
    cat(
        "Collections & Iteration",
        vec![
            doc(
                "Array",
                "[val1, val2, ...]",
                "A fixed-size, stack-allocated collection of elements of the same type.",
                vec![exd(
                    "let array = [1, 2, 3];",
                    "The size of an array is fixed at compile time and cannot be changed.",
                )],
            ),
            doc(
                "List",
                "+[val1, val2, ...]",
                "A dynamically-sized, heap-allocated collection. Created using the `+` operator.",
                vec![
                    exd(
                        "let list = +[1, 2, 3];",
                        "Create a heap-allocated, resizable list by prefixing an array literal with `+`.",
                    ),
                    exd(
                        "push(&list, 4);\nprint(list[3]);",
                        "Elements can be added to the list. This prints `4`.",
                    ),
                ],
            ),
            doc(
                "Slicing & Ranges",
                "<collection>[start..end]",
                "Creates a view into a collection using a range (`..`). Slices are iterable.",
                vec![
                    exd(
                        "let arr1234 = [1, 2, 3, 4];\nlet sl23 = arr1234[1..3];",
                        "Creates a slice `sl23` containing `[2, 3]`.",
                    ),
                    exd(
                        "let sl123 = arr1234[..3];",
                        "Omitting the start index defaults to 0. Creates a slice `sl123` containing `[1, 2, 3]`.",
                    ),
                    exd(
                        "let sl234 = arr1234[1..];",
                        "Omitting the end index defaults to the length of the collection. Creates `sl234` containing `[2, 3, 4]`.",
                    ),
                ],
            ),
            doc(
                "For Loop",
                "for <var> in <iterable> { ... }",
                "Iterates over any iterable type, such as a range, array, slice, or list.",
                vec![
                    exd(
                        "for i in 0..5 {\n    print(i);\n}",
                        "Iterating over a range. This will print the numbers 0 through 4.",
                    ),
                    exd(
                        "let names = [\"A\", \"B\", \"C\"];\nfor name in names {\n    print(name);\n}",
                        "Iterating over an array slice. This will print 'A', 'B', and 'C'.",
                    ),
                ],
            ),
        ],
    )
}

fn composite_data_types() -> crate::raw::RawCategory {
    cat(
        "Composite Data Types",
        vec![
            doc(
                "Struct",
                "(name1: val1, name2: val2)",
                "A collection of named fields, accessed with dot notation.",
                vec![
                    exd(
                        "let point = (x: 1, y: 2, label: \"start\");",
                        "Define a struct with named fields.",
                    ),
                    exd(
                        "print(point.label);",
                        "Access fields using dot notation. This will print 'start'.",
                    ),
                ],
            ),
            doc(
                "Tuple",
                "(val1, val2, ...)",
                "An ordered collection of values, accessed by a numeric index.",
                vec![
                    exd(
                        "let pair = (1, \"asd\");",
                        "Define a tuple with values of different types.",
                    ),
                    exd(
                        "print(pair[0]);",
                        "Access elements by their 0-based index. This will print `1`.",
                    ),
                ],
            ),
        ],
    )
}

fn generics() -> crate::raw::RawCategory {
    cat(
        "Generics",
        vec![doc(
            "Generic Function",
            "fn <name><T>(param: T) -> ...",
            "Defines a function that can operate on values of different types. Type parameters are declared in angle brackets. The compiler infers the type at the call site.",
            vec![
                exd(
                    "// A generic function that works on a slice of any type T.\npub fn print_first<T>(sl: <T>) {\n    if len(sl) > 0 {\n        print(sl[0]);\n        print(\"\\n\");\n    }\n}",
                    "Type parameters like `<T>` allow the function to be generic.",
                ),
                exd(
                    "let nums = [10, 20, 30];\nprint_first(nums); // Prints 10\n\nlet names = [\"Ren\", \"Lang\"];\nprint_first(names); // Prints \"Ren\"",
                    "The function is called without explicit types; the compiler infers them from the arguments.",
                ),
            ],
        )],
    )
}

fn error_handling() -> crate::raw::RawCategory {
    cat(
        "Error handling",
        vec![
            doc(
                "Error type",
                "<ok type> ? <error type>",
                "A union type for functions that can return either a success value or a failure value. Use `if let` to handle the result.",
                vec![
                    exd(
                        "// This function returns a list of characters or an error message.\nfn read_file(path: <char>) -> [char] ? <char> { ... }",
                        "The `?` in the return type indicates that the function can fail.",
                    ),
                    exd(
                        "let result = read_file(\"data.txt\");",
                        "The variable `result` now holds either a `[char]` on success or a `<char>` on failure.",
                    ),
                ],
            ),
            doc(
                "Optional type",
                "?<type>",
                "Represents a value that may be present or absent. It is a convenient shorthand for `<type> ? null`, where `null` is a special type indicating absence.",
                vec![
                    exd(
                        "// This function tries to find a user and may return nothing.\nfn find_user(id: int) -> ?(name: <char>) { ... }",
                        "The `?` prefix in the return type indicates the result is optional.",
                    ),
                    exd(
                        "let user = find_user(42);",
                        "The `user` variable might contain a user struct or a `null`-like value if the user was not found.",
                    ),
                ],
            ),
            doc(
                "Error propagation",
                "err_expr?",
                "The `?` operator unwraps a successful value or immediately returns the error from the current function. The calling function's return type must be compatible with the propagated error.",
                vec![exd(
                    "fn read_and_process() -> int ? <char> {\n    let data = read_file(\"data.txt\")?;\n    // ... process data ...\n    return 0;\n}",
                    "If `read_file` fails, the `?` causes `read_and_process` to immediately return the error it received from `read_file`.",
                )],
            ),
            doc(
                "Panic on error",
                "err_expr!",
                "The `!` operator unwraps a successful value or panics if it's an error, terminating the program. Use this for unrecoverable errors where the program cannot reasonably continue.",
                vec![
                    exd(
                        "let config = read_file(\"config.ini\")!",
                        "If `config.ini` is crucial for the program to run, `!` ensures it doesn't proceed in an invalid state.",
                    ),
                    exd(
                        "print(\"Config loaded: \"); print(config);",
                        "This line will only execute if `read_file` succeeds. Otherwise, the program will crash with an error message.",
                    ),
                ],
            ),
            doc(
                "Unwrapping value",
                "if let <ok name> = err_expr { ... } else <error name> { ... }",
                "The idiomatic way to safely handle and unwrap error and optional types. It checks for the success variant, binding its value to `<ok name>`, or executes the `else` block with the error value.",
                vec![
                    exd(
                        "let result = read_file(\"data.txt\");",
                        "First, call a function that returns a result.",
                    ),
                    exd(
                        "if let contents = result {\n  print(\"Success:\\n\");\n  print(contents);\n} else err {\n  eprint(\"Error: \");\n  eprint(err);\n}",
                        "The `if let` construct safely unwraps the result, allowing separate logic for success and failure cases.",
                    ),
                ],
            ),
        ],
    )
}
