//! Seed records for the catalog
//!
//! Sample data standing in for a backend response. Lesson durations and
//! completion counts are display figures, not measurements.

use std::collections::HashMap;

use super::{Catalog, Challenge, ContentBlock, Course, Language, Lesson, LessonContent};
use crate::types::{Difficulty, Level};

fn lesson(id: &str, title: &str, duration_minutes: u32) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        duration_minutes,
    }
}

fn text(body: &str) -> ContentBlock {
    ContentBlock::Text(body.to_string())
}

fn code(language: &str, source: &str) -> ContentBlock {
    ContentBlock::Code {
        language: language.to_string(),
        source: source.to_string(),
    }
}

fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "js-fundamentals".to_string(),
            title: "JavaScript Fundamentals".to_string(),
            description: "Learn the core concepts of JavaScript programming from the ground up. \
                          Perfect for beginners who want to start their coding journey."
                .to_string(),
            level: Level::Beginner,
            tags: vec![
                "JavaScript".to_string(),
                "Web Development".to_string(),
                "Programming Basics".to_string(),
            ],
            instructor: "Sarah Chen".to_string(),
            rating: 4.8,
            review_count: 128,
            total_time: "6 hours 30 minutes".to_string(),
            lessons: vec![
                lesson("js-intro", "Introduction to JavaScript", 12),
                lesson("js-variables", "Variables and Data Types", 18),
                lesson("js-operators", "Operators and Expressions", 15),
                lesson("js-conditionals", "Control Flow: Conditionals", 20),
                lesson("js-loops", "Control Flow: Loops", 22),
                lesson("js-arrays", "Arrays and Array Methods", 25),
                lesson("js-functions", "Functions and Scope", 30),
                lesson("js-objects", "Objects and Properties", 28),
                lesson("js-dom", "DOM Manipulation", 35),
                lesson("js-events", "Events and Event Handling", 25),
                lesson("js-async", "Asynchronous JavaScript", 40),
                lesson("js-project", "Final Project", 45),
            ],
        },
        Course {
            id: "react-hooks".to_string(),
            title: "React Hooks & Context".to_string(),
            description: "Master React's powerful Hooks API and learn how to manage state \
                          effectively across your application with Context."
                .to_string(),
            level: Level::Intermediate,
            tags: vec![
                "React".to_string(),
                "Hooks".to_string(),
                "Web Development".to_string(),
                "JavaScript".to_string(),
            ],
            instructor: "Michael Rodriguez".to_string(),
            rating: 4.9,
            review_count: 87,
            total_time: "4 hours 15 minutes".to_string(),
            lessons: vec![
                lesson("react-intro", "Introduction to React Hooks", 15),
                lesson("usestate-hook", "The useState Hook", 25),
                lesson("useeffect-hook", "The useEffect Hook", 30),
                lesson("useref-hook", "The useRef Hook", 20),
                lesson("usememo-hook", "The useMemo Hook", 25),
                lesson("usecallback-hook", "The useCallback Hook", 25),
                lesson("context-api", "React Context API", 35),
                lesson("custom-hooks", "Building Custom Hooks", 30),
            ],
        },
        Course {
            id: "typescript-advanced".to_string(),
            title: "TypeScript Advanced Types".to_string(),
            description: "Take your TypeScript skills to the next level with advanced type \
                          features, generics, conditional types, and more."
                .to_string(),
            level: Level::Advanced,
            tags: vec![
                "TypeScript".to_string(),
                "Advanced".to_string(),
                "JavaScript".to_string(),
                "Web Development".to_string(),
            ],
            instructor: "Priya Patel".to_string(),
            rating: 4.7,
            review_count: 64,
            total_time: "5 hours 40 minutes".to_string(),
            lessons: vec![
                lesson("ts-type-system", "The TypeScript Type System", 20),
                lesson("ts-generics", "Generics in Depth", 30),
                lesson("ts-unions", "Union and Intersection Types", 25),
                lesson("ts-guards", "Type Guards and Narrowing", 28),
                lesson("ts-mapped", "Mapped Types", 32),
                lesson("ts-conditional", "Conditional Types", 35),
                lesson("ts-template-literals", "Template Literal Types", 25),
                lesson("ts-decorators", "Decorators", 30),
                lesson("ts-utility", "Utility Types Deep Dive", 28),
                lesson("ts-project", "Typed Library Project", 50),
            ],
        },
        Course {
            id: "nextjs-app".to_string(),
            title: "Next.js App Router".to_string(),
            description: "Build modern web apps with file-based routing, server components, \
                          and data fetching patterns."
                .to_string(),
            level: Level::Intermediate,
            tags: vec!["Next.js".to_string(), "Framework".to_string(), "React".to_string()],
            instructor: "David Kim".to_string(),
            rating: 4.6,
            review_count: 52,
            total_time: "3 hours 20 minutes".to_string(),
            lessons: vec![
                lesson("next-routing", "File-Based Routing", 20),
                lesson("next-layouts", "Layouts and Templates", 25),
                lesson("next-server-components", "Server Components", 30),
                lesson("next-data", "Data Fetching", 35),
                lesson("next-forms", "Forms and Server Actions", 30),
                lesson("next-deploy", "Building and Deploying", 25),
            ],
        },
        Course {
            id: "tailwind-css".to_string(),
            title: "Tailwind CSS Essentials".to_string(),
            description: "Style applications quickly with the utility-first CSS framework."
                .to_string(),
            level: Level::Beginner,
            tags: vec!["CSS".to_string(), "Styling".to_string()],
            instructor: "Emma Wilson".to_string(),
            rating: 4.5,
            review_count: 41,
            total_time: "2 hours 45 minutes".to_string(),
            lessons: vec![
                lesson("tw-utilities", "Utility-First Thinking", 18),
                lesson("tw-layout", "Layout and Spacing", 22),
                lesson("tw-typography", "Typography and Color", 20),
                lesson("tw-responsive", "Responsive Design", 25),
                lesson("tw-components", "Extracting Components", 28),
            ],
        },
    ]
}

fn lesson_content() -> HashMap<String, LessonContent> {
    let mut content = HashMap::new();

    content.insert(
        "js-arrays".to_string(),
        LessonContent {
            id: "js-arrays".to_string(),
            title: "Arrays and Array Methods".to_string(),
            course_id: "js-fundamentals".to_string(),
            time_to_complete: "25 min".to_string(),
            prev_lesson_id: Some("js-loops".to_string()),
            next_lesson_id: Some("js-functions".to_string()),
            blocks: vec![
                text(
                    "# Arrays in JavaScript\n\nArrays are a special type of object in JavaScript \
                     that allow you to store multiple values in a single variable. They are \
                     ordered collections that can hold any type of data.",
                ),
                code(
                    "javascript",
                    "// Creating an array\nlet fruits = [\"Apple\", \"Banana\", \"Orange\"];\n\n\
                     // Accessing array elements (zero-indexed)\n\
                     console.log(fruits[0]); // Output: \"Apple\"\n\
                     console.log(fruits[1]); // Output: \"Banana\"\n\
                     console.log(fruits[2]); // Output: \"Orange\"",
                ),
                text(
                    "## Array Properties and Methods\n\nJavaScript arrays come with many built-in \
                     properties and methods that make them powerful tools for data manipulation.",
                ),
                code(
                    "javascript",
                    "// Array length property\nlet numbers = [1, 2, 3, 4, 5];\n\
                     console.log(numbers.length); // Output: 5\n\n\
                     // Common Array Methods\n\n\
                     // 1. push() - adds element to the end\nnumbers.push(6);\n\
                     console.log(numbers); // [1, 2, 3, 4, 5, 6]\n\n\
                     // 2. pop() - removes element from the end\nlet lastNumber = numbers.pop();\n\
                     console.log(lastNumber); // 6\n\n\
                     // 3. unshift() - adds element to the beginning\nnumbers.unshift(0);\n\
                     console.log(numbers); // [0, 1, 2, 3, 4, 5]\n\n\
                     // 4. shift() - removes element from the beginning\n\
                     let firstNumber = numbers.shift();\nconsole.log(firstNumber); // 0",
                ),
                text(
                    "## Array Iteration Methods\n\nModern JavaScript provides many powerful \
                     methods to iterate over arrays and transform data.",
                ),
                code(
                    "javascript",
                    "// forEach() - executes a function on each element\n\
                     let colors = [\"red\", \"green\", \"blue\"];\n\
                     colors.forEach((color, index) => {\n\
                     \x20 console.log(`Color at position ${index} is ${color}`);\n});\n\n\
                     // map() - creates a new array by transforming each element\n\
                     let numbers = [1, 2, 3, 4, 5];\n\
                     let doubled = numbers.map(num => num * 2);\n\
                     console.log(doubled); // [2, 4, 6, 8, 10]\n\n\
                     // filter() - creates a new array with elements that pass a test\n\
                     let evenNumbers = numbers.filter(num => num % 2 === 0);\n\
                     console.log(evenNumbers); // [2, 4]\n\n\
                     // reduce() - reduces array to a single value\n\
                     let sum = numbers.reduce((total, num) => total + num, 0);\n\
                     console.log(sum); // 15",
                ),
                ContentBlock::Quiz {
                    question: "Which method adds an element to the end of an array?".to_string(),
                    options: vec![
                        "unshift()".to_string(),
                        "push()".to_string(),
                        "pop()".to_string(),
                        "shift()".to_string(),
                    ],
                    answer: 1,
                },
            ],
        },
    );

    content.insert(
        "js-intro".to_string(),
        LessonContent {
            id: "js-intro".to_string(),
            title: "Introduction to JavaScript".to_string(),
            course_id: "js-fundamentals".to_string(),
            time_to_complete: "12 min".to_string(),
            prev_lesson_id: None,
            next_lesson_id: Some("js-variables".to_string()),
            blocks: vec![
                text(
                    "# Welcome to JavaScript\n\nJavaScript is the programming language of the \
                     web. It runs in every browser and powers everything from small page \
                     interactions to full applications.",
                ),
                code(
                    "javascript",
                    "// Your first JavaScript program\nconsole.log(\"Hello, World!\");",
                ),
                text(
                    "## Where JavaScript Runs\n\nJavaScript started in the browser, but today it \
                     also runs on servers, in build tools, and on mobile devices. In this course \
                     you'll write code that works anywhere.",
                ),
                ContentBlock::Quiz {
                    question: "Which statement prints text to the console?".to_string(),
                    options: vec![
                        "print(\"hi\")".to_string(),
                        "echo \"hi\"".to_string(),
                        "console.log(\"hi\")".to_string(),
                        "System.out.println(\"hi\")".to_string(),
                    ],
                    answer: 2,
                },
            ],
        },
    );

    content.insert(
        "js-variables".to_string(),
        LessonContent {
            id: "js-variables".to_string(),
            title: "Variables and Data Types".to_string(),
            course_id: "js-fundamentals".to_string(),
            time_to_complete: "18 min".to_string(),
            prev_lesson_id: Some("js-intro".to_string()),
            next_lesson_id: Some("js-operators".to_string()),
            blocks: vec![
                text(
                    "# Variables\n\nVariables store values so you can reuse them. Modern \
                     JavaScript uses `let` for values that change and `const` for values that \
                     don't.",
                ),
                code(
                    "javascript",
                    "let score = 0;\nconst playerName = \"Alex\";\n\nscore = score + 10;\n\
                     console.log(`${playerName} has ${score} points`);",
                ),
                text(
                    "## Data Types\n\nThe basic types are numbers, strings, booleans, `null`, \
                     and `undefined`. Use `typeof` to check what you're holding.",
                ),
                code(
                    "javascript",
                    "console.log(typeof 42);        // \"number\"\n\
                     console.log(typeof \"hello\");   // \"string\"\n\
                     console.log(typeof true);      // \"boolean\"",
                ),
                ContentBlock::Quiz {
                    question: "Which keyword declares a value that cannot be reassigned?"
                        .to_string(),
                    options: vec![
                        "var".to_string(),
                        "let".to_string(),
                        "const".to_string(),
                        "static".to_string(),
                    ],
                    answer: 2,
                },
            ],
        },
    );

    content.insert(
        "usestate-hook".to_string(),
        LessonContent {
            id: "usestate-hook".to_string(),
            title: "The useState Hook".to_string(),
            course_id: "react-hooks".to_string(),
            time_to_complete: "25 min".to_string(),
            prev_lesson_id: Some("react-intro".to_string()),
            next_lesson_id: Some("useeffect-hook".to_string()),
            blocks: vec![
                text(
                    "# useState\n\n`useState` gives a function component a piece of state and a \
                     setter to update it. Calling the setter re-renders the component with the \
                     new value.",
                ),
                code(
                    "javascript",
                    "import { useState } from \"react\";\n\nfunction Counter() {\n\
                     \x20 const [count, setCount] = useState(0);\n\n\
                     \x20 return (\n\
                     \x20   <button onClick={() => setCount(count + 1)}>\n\
                     \x20     Clicked {count} times\n\
                     \x20   </button>\n\
                     \x20 );\n}",
                ),
                text(
                    "## Rules\n\nHooks must be called at the top level of the component, in the \
                     same order on every render. Never call them inside loops or conditions.",
                ),
                ContentBlock::Quiz {
                    question: "What does the array returned by useState contain?".to_string(),
                    options: vec![
                        "The previous and next state".to_string(),
                        "The current state and a setter function".to_string(),
                        "A getter and the initial value".to_string(),
                        "Two copies of the state".to_string(),
                    ],
                    answer: 1,
                },
            ],
        },
    );

    content
}

fn challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            id: "sum-array".to_string(),
            title: "Sum Array Elements".to_string(),
            difficulty: Difficulty::Easy,
            category: "Arrays".to_string(),
            tags: vec!["JavaScript".to_string(), "Arrays".to_string(), "Loops".to_string()],
            estimated_minutes: 10,
            completed_count: 3278,
            description: "Write a function that returns the sum of all numbers in an array."
                .to_string(),
            starter_code: "// Write your JavaScript code here\n\nfunction sumArray(arr) {\n\
                           \x20 // Implement this function\n\
                           \x20 // It should return the sum of all numbers in the array\n\n}"
                .to_string(),
            passed_transcript: "All tests passed!\n\n\
                Test 1: passed\nInput: [1, 2, 3, 4]\nExpected: 10\nOutput: 10\n\n\
                Test 2: passed\nInput: [-1, -2, -3]\nExpected: -6\nOutput: -6\n\n\
                Test 3: passed\nInput: [0, 0, 0]\nExpected: 0\nOutput: 0\n\n\
                Test 4: passed\nInput: [5]\nExpected: 5\nOutput: 5"
                .to_string(),
            failed_transcript: "Some tests failed!\n\n\
                Test 1: passed\nInput: [1, 2, 3, 4]\nExpected: 10\nOutput: 10\n\n\
                Test 2: failed\nInput: [-1, -2, -3]\nExpected: -6\nOutput: -5\n\n\
                Test 3: passed\nInput: [0, 0, 0]\nExpected: 0\nOutput: 0\n\n\
                Test 4: passed\nInput: [5]\nExpected: 5\nOutput: 5"
                .to_string(),
        },
        Challenge {
            id: "palindrome-check".to_string(),
            title: "Check for Palindrome".to_string(),
            difficulty: Difficulty::Easy,
            category: "Strings".to_string(),
            tags: vec![
                "JavaScript".to_string(),
                "Strings".to_string(),
                "Algorithms".to_string(),
            ],
            estimated_minutes: 15,
            completed_count: 2954,
            description: "Return true when a string reads the same forwards and backwards, \
                          ignoring case."
                .to_string(),
            starter_code: "function isPalindrome(str) {\n\
                           \x20 // Return true if str reads the same in both directions\n\n}"
                .to_string(),
            passed_transcript: "All tests passed!\n\n\
                Test 1: passed\nInput: \"racecar\"\nExpected: true\nOutput: true\n\n\
                Test 2: passed\nInput: \"Level\"\nExpected: true\nOutput: true\n\n\
                Test 3: passed\nInput: \"hello\"\nExpected: false\nOutput: false"
                .to_string(),
            failed_transcript: "Some tests failed!\n\n\
                Test 1: passed\nInput: \"racecar\"\nExpected: true\nOutput: true\n\n\
                Test 2: failed\nInput: \"Level\"\nExpected: true\nOutput: false\n\n\
                Test 3: passed\nInput: \"hello\"\nExpected: false\nOutput: false"
                .to_string(),
        },
        Challenge {
            id: "find-duplicates".to_string(),
            title: "Find Duplicates in Array".to_string(),
            difficulty: Difficulty::Medium,
            category: "Arrays".to_string(),
            tags: vec![
                "JavaScript".to_string(),
                "Arrays".to_string(),
                "Data Structures".to_string(),
            ],
            estimated_minutes: 20,
            completed_count: 1876,
            description: "Return every value that appears more than once in the input array."
                .to_string(),
            starter_code: "function findDuplicates(arr) {\n\
                           \x20 // Return an array of the values that appear more than once\n\n}"
                .to_string(),
            passed_transcript: "All tests passed!\n\n\
                Test 1: passed\nInput: [1, 2, 2, 3, 3, 3]\nExpected: [2, 3]\nOutput: [2, 3]\n\n\
                Test 2: passed\nInput: [1, 2, 3]\nExpected: []\nOutput: []\n\n\
                Test 3: passed\nInput: [\"a\", \"b\", \"a\"]\nExpected: [\"a\"]\nOutput: [\"a\"]"
                .to_string(),
            failed_transcript: "Some tests failed!\n\n\
                Test 1: passed\nInput: [1, 2, 2, 3, 3, 3]\nExpected: [2, 3]\nOutput: [2, 3]\n\n\
                Test 2: passed\nInput: [1, 2, 3]\nExpected: []\nOutput: []\n\n\
                Test 3: failed\nInput: [\"a\", \"b\", \"a\"]\nExpected: [\"a\"]\nOutput: [\"a\", \"a\"]"
                .to_string(),
        },
        Challenge {
            id: "reverse-linked-list".to_string(),
            title: "Reverse a Linked List".to_string(),
            difficulty: Difficulty::Medium,
            category: "Linked Lists".to_string(),
            tags: vec![
                "JavaScript".to_string(),
                "Linked Lists".to_string(),
                "Algorithms".to_string(),
            ],
            estimated_minutes: 25,
            completed_count: 1543,
            description: "Reverse a singly linked list and return the new head node.".to_string(),
            starter_code: "function reverseList(head) {\n\
                           \x20 // Each node is { value, next }\n\
                           \x20 // Return the head of the reversed list\n\n}"
                .to_string(),
            passed_transcript: "All tests passed!\n\n\
                Test 1: passed\nInput: 1 -> 2 -> 3\nExpected: 3 -> 2 -> 1\nOutput: 3 -> 2 -> 1\n\n\
                Test 2: passed\nInput: 1\nExpected: 1\nOutput: 1\n\n\
                Test 3: passed\nInput: (empty)\nExpected: (empty)\nOutput: (empty)"
                .to_string(),
            failed_transcript: "Some tests failed!\n\n\
                Test 1: failed\nInput: 1 -> 2 -> 3\nExpected: 3 -> 2 -> 1\nOutput: 1 -> 2 -> 3\n\n\
                Test 2: passed\nInput: 1\nExpected: 1\nOutput: 1\n\n\
                Test 3: passed\nInput: (empty)\nExpected: (empty)\nOutput: (empty)"
                .to_string(),
        },
        Challenge {
            id: "binary-search-tree".to_string(),
            title: "Implement Binary Search Tree".to_string(),
            difficulty: Difficulty::Hard,
            category: "Trees".to_string(),
            tags: vec![
                "JavaScript".to_string(),
                "Trees".to_string(),
                "Data Structures".to_string(),
            ],
            estimated_minutes: 30,
            completed_count: 876,
            description: "Build a binary search tree supporting insert and contains.".to_string(),
            starter_code: "class BinarySearchTree {\n\
                           \x20 insert(value) {\n\x20   // Add value, keeping the BST property\n\x20 }\n\n\
                           \x20 contains(value) {\n\x20   // Return true if value is in the tree\n\x20 }\n}"
                .to_string(),
            passed_transcript: "All tests passed!\n\n\
                Test 1: passed\nInsert: [8, 3, 10], contains(3)\nExpected: true\nOutput: true\n\n\
                Test 2: passed\nInsert: [8, 3, 10], contains(7)\nExpected: false\nOutput: false\n\n\
                Test 3: passed\nIn-order traversal sorted\nExpected: true\nOutput: true"
                .to_string(),
            failed_transcript: "Some tests failed!\n\n\
                Test 1: passed\nInsert: [8, 3, 10], contains(3)\nExpected: true\nOutput: true\n\n\
                Test 2: failed\nInsert: [8, 3, 10], contains(7)\nExpected: false\nOutput: true\n\n\
                Test 3: passed\nIn-order traversal sorted\nExpected: true\nOutput: true"
                .to_string(),
        },
        Challenge {
            id: "merge-sort".to_string(),
            title: "Implement Merge Sort".to_string(),
            difficulty: Difficulty::Hard,
            category: "Sorting".to_string(),
            tags: vec![
                "JavaScript".to_string(),
                "Sorting".to_string(),
                "Algorithms".to_string(),
            ],
            estimated_minutes: 35,
            completed_count: 765,
            description: "Sort an array of numbers using the merge sort algorithm.".to_string(),
            starter_code: "function mergeSort(arr) {\n\
                           \x20 // Split, sort each half, then merge\n\n}"
                .to_string(),
            passed_transcript: "All tests passed!\n\n\
                Test 1: passed\nInput: [5, 2, 8, 1]\nExpected: [1, 2, 5, 8]\nOutput: [1, 2, 5, 8]\n\n\
                Test 2: passed\nInput: []\nExpected: []\nOutput: []\n\n\
                Test 3: passed\nInput: [3, 3, 1]\nExpected: [1, 3, 3]\nOutput: [1, 3, 3]"
                .to_string(),
            failed_transcript: "Some tests failed!\n\n\
                Test 1: passed\nInput: [5, 2, 8, 1]\nExpected: [1, 2, 5, 8]\nOutput: [1, 2, 5, 8]\n\n\
                Test 2: passed\nInput: []\nExpected: []\nOutput: []\n\n\
                Test 3: failed\nInput: [3, 3, 1]\nExpected: [1, 3, 3]\nOutput: [1, 3]"
                .to_string(),
        },
    ]
}

fn languages() -> Vec<Language> {
    vec![
        Language {
            id: "javascript".to_string(),
            name: "JavaScript".to_string(),
            extension: "js".to_string(),
            default_code: "// JavaScript Code\n\nfunction greet(name) {\n\
                           \x20 return `Hello, ${name}!`;\n}\n\nconsole.log(greet(\"World\"));"
                .to_string(),
        },
        Language {
            id: "python".to_string(),
            name: "Python".to_string(),
            extension: "py".to_string(),
            default_code: "# Python Code\n\ndef greet(name):\n\
                           \x20   return f\"Hello, {name}!\"\n\nprint(greet(\"World\"))"
                .to_string(),
        },
        Language {
            id: "html".to_string(),
            name: "HTML".to_string(),
            extension: "html".to_string(),
            default_code: "<!DOCTYPE html>\n<html>\n<head>\n  <title>My Page</title>\n</head>\n\
                           <body>\n  <h1>Hello, World!</h1>\n  <p>Welcome to my page.</p>\n\
                           </body>\n</html>"
                .to_string(),
        },
        Language {
            id: "css".to_string(),
            name: "CSS".to_string(),
            extension: "css".to_string(),
            default_code: "/* CSS Styles */\n\nbody {\n  font-family: Arial, sans-serif;\n\
                           \x20 margin: 0;\n  padding: 20px;\n  background-color: #f5f5f5;\n}\n\n\
                           h1 {\n  color: #333;\n}"
                .to_string(),
        },
        Language {
            id: "typescript".to_string(),
            name: "TypeScript".to_string(),
            extension: "ts".to_string(),
            default_code: "// TypeScript Code\n\nfunction greet(name: string): string {\n\
                           \x20 return `Hello, ${name}!`;\n}\n\nconsole.log(greet(\"World\"));"
                .to_string(),
        },
    ]
}

pub(super) fn seed() -> Catalog {
    Catalog {
        courses: courses(),
        lesson_content: lesson_content(),
        challenges: challenges(),
        languages: languages(),
    }
}
