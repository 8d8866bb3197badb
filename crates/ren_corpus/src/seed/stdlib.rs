//! "Standard Library" section: filesystem, IO, strings, argument parsing, memory,
//! data structures, utilities and error handling.

use super::{cat, doc, doc_warn, entry, ex, exd, func, sect};
use crate::raw::{RawCategory, RawSection};

pub(super) fn section() -> RawSection {
    sect(
        "Standard Library",
        vec![
            filesystem(),
            input_output(),
            string_and_conversion(),
            parsing_and_arguments(),
            memory_and_allocation(),
            data_structures(),
            utilities(),
            error_handling(),
        ],
    )
}

fn filesystem() -> RawCategory {
    cat(
        "Filesystem",
        vec![
            doc(
                "rename",
                "fn rename(old_path: <char>, new_path: <char>) -> int ? <char>",
                "Renames a file or directory from old_path to new_path. Returns an error message on failure.",
                vec![ex(
                    "let result = rename(\"old.txt\", \"new.txt\");\nif let _ = result {} else err {\n    panic(err);\n}",
                )],
            ),
            doc(
                "mkdir",
                "fn mkdir(path: <char>) -> int ? <char>",
                "Creates a new directory at the given path. Returns an error message on failure.",
                vec![ex("mkdir(\"new_directory\")!; // Panic if directory creation fails")],
            ),
            doc(
                "rmdir",
                "fn rmdir(path: <char>) -> int ? <char>",
                "Removes an empty directory at the specified path. Returns an error message if the directory is not empty or doesn't exist.",
                vec![ex("rmdir(\"empty_directory\")?; // Propagate error if it fails")],
            ),
            doc(
                "rm",
                "fn rm(path: <char>) -> int ? <char>",
                "Deletes the file at the given path. Returns an error message on failure.",
                vec![ex("rm(\"file_to_delete.txt\")!;")],
            ),
            doc(
                "exists",
                "fn exists(path: <char>) -> bool",
                "Checks if a file or directory exists at the given path.",
                vec![ex("if exists(\"my_file.txt\") {\n    print(\"File exists!\\n\");\n}")],
            ),
            doc(
                "is_dir",
                "fn is_dir(path: <char>) -> bool",
                "Returns true if the path refers to a directory.",
                vec![ex("if is_dir(\"my_folder\") {\n    print(\"It is a directory.\\n\");\n}")],
            ),
            doc(
                "list_dir",
                "fn list_dir(path: <char>) -> [<char>] ? <char>",
                "Lists all entries in the specified directory. Returns an error message on failure.",
                vec![ex(
                    "if let entries = list_dir(\".\") {\n    for entry in entries {\n        print(entry);\n        print(\"\\n\");\n    }\n} else err {\n    eprint(err);\n}",
                )],
            ),
        ],
    )
}

fn input_output() -> RawCategory {
    cat(
        "Input/Output",
        vec![
            doc(
                "print",
                "fn print<T>(msg: T)",
                "Prints the provided message to standard output.",
                vec![exd(
                    "print(\"Hello, \");\nprint(\"Ren!\");\nprint(123);",
                    "Output will be the concatenated string: `Hello, Ren!123`",
                )],
            ),
            doc(
                "eprint",
                "fn eprint<T>(msg: T)",
                "Prints the provided message to standard error.",
                vec![exd(
                    "eprint(\"Error: Something went wrong.\\n\");",
                    "This is useful for logging errors without polluting standard output.",
                )],
            ),
            doc(
                "input",
                "fn input() -> [char]",
                "Reads a line of input from the user until a newline character is encountered.",
                vec![
                    exd(
                        "print(\"What is your name? \");\nlet name = input();",
                        "Read a line of text from standard input into a mutable string list.",
                    ),
                    exd(
                        "print(\"Hello, \");\nprint(name);",
                        "The captured input can then be used.",
                    ),
                ],
            ),
            doc(
                "read",
                "fn read(path: <char>) -> [char] ? <char>",
                "Reads the contents of a file at the given path. Returns file contents or an error.",
                vec![ex(
                    "if let contents = read(\"config.txt\") {\n    print(\"File contents:\\n\");\n    print(contents);\n} else err {\n    eprint(\"Failed to read config: \");\n    eprint(err);\n}",
                )],
            ),
            doc(
                "write",
                "fn write(path: <char>, data: <char>) -> int ? <char>",
                "Writes data to the specified file path. Overwrites if the file exists.",
                vec![exd(
                    "write(\"log.txt\", \"This is a log message.\\n\")!",
                    "If `log.txt` cannot be written, the program will panic.",
                )],
            ),
        ],
    )
}

fn string_and_conversion() -> RawCategory {
    cat(
        "String & Conversion",
        vec![
            doc(
                "str",
                "fn str<T>(x: T) -> <char>",
                "Converts various types into their string representation.",
                vec![
                    exd(
                        "let my_int = 42;\nlet int_as_string = str(my_int);",
                        "Convert an integer to a string slice. The type is inferred.",
                    ),
                    exd(
                        "let my_bool = true;\nlet bool_as_string = str(my_bool);",
                        "It also works for other types like booleans, which become 'true' or 'false'.",
                    ),
                ],
            ),
            doc(
                "null_terminate",
                "fn null_terminate(s: <char>) -> *char",
                "Converts a string slice into a null-terminated string for C interoperability.",
                vec![exd(
                    "// Assume a C function `c_puts` that takes a `*char`\nlet my_slice = \"Hello from Ren\";\nlet c_string = null_terminate(my_slice);\nc_puts(c_string);",
                    "This is essential when calling external C functions that expect C-style strings.",
                )],
            ),
        ],
    )
}

fn parsing_and_arguments() -> RawCategory {
    cat(
        "Parsing & Argument Handling",
        vec![
            doc_warn(
                "print_help",
                "fn print_help(name: *char, expected: <<char>>)",
                "Prints help text with the expected command-line arguments.",
                "Shouldn't be used - called automatically",
            ),
            doc_warn(
                "arg_parse",
                "fn arg_parse(args: <*char>, expected: <<char>>) -> int ? <char>",
                "Parses arguments and ensures the correct number of arguments is passed.",
                "Shouldn't be used - called automatically",
            ),
            // One topic, two overloads: the parse target type selects the overload.
            entry(
                "parse",
                vec![
                    func(
                        "parse (int)",
                        "fn parse(str: *char, res: *int) -> int ? <char>",
                        "Parses a string into an integer. Returns an error on failure.",
                        vec![ex(
                            "// Given a command line argument `argv[1]`\nlet my_num: int;\nif let _ = parse(argv[1], &my_num) {\n    print(\"Parsed number successfully!\");\n} else err {\n    panic(err);\n}",
                        )],
                    ),
                    func(
                        "parse (string)",
                        "fn parse(str: *char, res: *<char>) -> int ? <char>",
                        "Parses a string and stores a copy into the provided buffer.",
                        vec![ex(
                            "// Given a command line argument `argv[1]`\nlet my_str: <char>;\nparse(argv[1], &my_str)!;",
                        )],
                    ),
                ],
            ),
            doc_warn(
                "parse_opt",
                "fn parse_opt<T>(argc: *int, argv: **char, name: <char>, opt: *?T) -> int ? <char>",
                "Parses an optional command-line argument with the format --name <value>.",
                "Shouldn't be used - called automatically",
            ),
        ],
    )
}

fn memory_and_allocation() -> RawCategory {
    cat(
        "Memory & Allocation",
        vec![
            doc_warn(
                "alloc",
                "fn alloc(size: int) -> *any",
                "Allocates memory from a custom heap allocator and returns a pointer to it.",
                "Using built in lists, hashmaps and the '+' operator is preferred.",
            ),
            doc_warn(
                "init",
                "fn init()",
                "Initializes the memory allocator with default values.",
                "Shouldn't be used - called automatically",
            ),
        ],
    )
}

fn data_structures() -> RawCategory {
    cat(
        "Data Structures",
        vec![
            doc(
                "push",
                "fn push<T>(list: *[T], el: T)",
                "Pushes an element to a dynamically-sized list.",
                vec![
                    exd("let my_list = +[10, 20];", "Start with a heap-allocated list."),
                    exd(
                        "push(&my_list, 30);",
                        "Push a new element onto the end of the list. `my_list` now contains `[10, 20, 30]`.",
                    ),
                ],
            ),
            doc(
                "split",
                "fn split<T>(sl: <T>, split: T) -> [<T>]",
                "Splits a slice into sub-slices based on the given delimiter.",
                vec![
                    exd(
                        "let sentence = \"ren-is-fun\";\nlet parts = split(sentence, '-');",
                        "Split a string slice by a delimiter character. The types are inferred.",
                    ),
                    exd(
                        "for part in parts {\n    print(part);\n    print(\" \");\n}",
                        "The result is a list of string slices. This will print 'ren is fun '.",
                    ),
                ],
            ),
            doc_warn(
                "init_map",
                "fn init_map<K, V>(fields: <(K, V)>) -> {K: V}",
                "Initializes a simple hash map with the given key-value pairs.",
                "Use the map declaration syntax instead (map = {key: value, ...}).",
            ),
            doc_warn(
                "insert",
                "fn insert<K, V>(map_ref: *{K: V}, key: K, value: V)",
                "Inserts a key-value pair into the hash map.",
                "Use the short-hand syntax instead (map[key] = value).",
            ),
            doc_warn(
                "get",
                "fn get<K, V>(map: {K: V}, key: K) -> ?V",
                "Retrieves a value from the hash map by key. Returns an optional value.",
                "Use the short-hand syntax instead (value = map[key]).",
            ),
        ],
    )
}

fn utilities() -> RawCategory {
    cat(
        "Utilities",
        vec![
            doc(
                "cmp",
                "fn cmp(l: *char, r: <char>) -> bool",
                "Compares a null-terminated C-style string to a slice.",
                vec![exd(
                    "// Typically used for comparing command line args (`*char`)\n// with a known string slice (`<char>`).\nif cmp(argv[1], \"--help\") {\n    print_help();\n}",
                    "Returns true if the strings are identical.",
                )],
            ),
            doc(
                "hash",
                "fn hash(x: int) -> int",
                "Computes a simple 64-bit FNV-1a hash of an integer.",
                vec![ex("let h = hash(12345);\nprint(h);")],
            ),
        ],
    )
}

fn error_handling() -> RawCategory {
    cat(
        "Error Handling",
        vec![doc(
            "panic",
            "fn panic<T>(x: T)",
            "Prints an error message and terminates the program with exit code 1.",
            vec![
                exd(
                    "let result = read(\"non_existent_file.txt\");",
                    "Attempt an operation that can fail.",
                ),
                exd(
                    "if let _ = result { /* do nothing on success */ } else err {\n    panic(err); // Panics with the error from read()\n}",
                    "The `!` operator is often a more concise way to panic on error: `read(...)!`",
                ),
            ],
        )],
    )
}
