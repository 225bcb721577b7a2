//! Remote operator enumeration
//!
//! The numeric codes are the server protocol's term type codes. They are a
//! frozen external contract: never renumber an entry.

use std::fmt;

macro_rules! term_kinds {
    ($($variant:ident = $code:literal => $name:literal,)+) => {
        /// Operator of a `Call` term
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TermKind {
            $($variant,)+
        }

        impl TermKind {
            /// Every operator, in declaration order
            pub const ALL: &'static [TermKind] = &[$(TermKind::$variant,)+];

            /// Wire-stable protocol code
            pub fn code(&self) -> u32 {
                match self {
                    $(TermKind::$variant => $code,)+
                }
            }

            /// Snake-case operator name used by the printer
            pub fn name(&self) -> &'static str {
                match self {
                    $(TermKind::$variant => $name,)+
                }
            }

            /// Look an operator up by its protocol code
            pub fn from_code(code: u32) -> Option<TermKind> {
                match code {
                    $($code => Some(TermKind::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

term_kinds! {
    Datum = 1 => "datum",
    MakeArray = 2 => "make_array",
    MakeObj = 3 => "make_obj",
    Var = 10 => "var",
    Javascript = 11 => "js",
    Uuid = 169 => "uuid",
    Http = 153 => "http",
    Error = 12 => "error",
    ImplicitVar = 13 => "implicit_var",
    Db = 14 => "db",
    Table = 15 => "table",
    Get = 16 => "get",
    GetAll = 78 => "get_all",
    Eq = 17 => "eq",
    Ne = 18 => "ne",
    Lt = 19 => "lt",
    Le = 20 => "le",
    Gt = 21 => "gt",
    Ge = 22 => "ge",
    Not = 23 => "not",
    Add = 24 => "add",
    Sub = 25 => "sub",
    Mul = 26 => "mul",
    Div = 27 => "div",
    Mod = 28 => "mod",
    Floor = 183 => "floor",
    Ceil = 184 => "ceil",
    Round = 185 => "round",
    Append = 29 => "append",
    Prepend = 80 => "prepend",
    Difference = 95 => "difference",
    SetInsert = 88 => "set_insert",
    SetIntersection = 89 => "set_intersection",
    SetUnion = 90 => "set_union",
    SetDifference = 91 => "set_difference",
    Slice = 30 => "slice",
    Skip = 70 => "skip",
    Limit = 71 => "limit",
    OffsetsOf = 87 => "offsets_of",
    Contains = 93 => "contains",
    GetField = 31 => "get_field",
    Keys = 94 => "keys",
    Values = 186 => "values",
    Object = 143 => "object",
    HasFields = 32 => "has_fields",
    WithFields = 96 => "with_fields",
    Pluck = 33 => "pluck",
    Without = 34 => "without",
    Merge = 35 => "merge",
    BetweenDeprecated = 36 => "between_deprecated",
    Between = 182 => "between",
    Reduce = 37 => "reduce",
    Map = 38 => "map",
    Fold = 187 => "fold",
    Filter = 39 => "filter",
    ConcatMap = 40 => "concat_map",
    OrderBy = 41 => "order_by",
    Distinct = 42 => "distinct",
    Count = 43 => "count",
    IsEmpty = 86 => "is_empty",
    Union = 44 => "union",
    Nth = 45 => "nth",
    Bracket = 170 => "bracket",
    InnerJoin = 48 => "inner_join",
    OuterJoin = 49 => "outer_join",
    EqJoin = 50 => "eq_join",
    Zip = 72 => "zip",
    Range = 173 => "range",
    InsertAt = 82 => "insert_at",
    DeleteAt = 83 => "delete_at",
    ChangeAt = 84 => "change_at",
    SpliceAt = 85 => "splice_at",
    CoerceTo = 51 => "coerce_to",
    TypeOf = 52 => "type_of",
    Update = 53 => "update",
    Delete = 54 => "delete",
    Replace = 55 => "replace",
    Insert = 56 => "insert",
    DbCreate = 57 => "db_create",
    DbDrop = 58 => "db_drop",
    DbList = 59 => "db_list",
    TableCreate = 60 => "table_create",
    TableDrop = 61 => "table_drop",
    TableList = 62 => "table_list",
    Config = 174 => "config",
    Status = 175 => "status",
    Wait = 177 => "wait",
    Reconfigure = 176 => "reconfigure",
    Rebalance = 179 => "rebalance",
    Sync = 138 => "sync",
    Grant = 188 => "grant",
    IndexCreate = 75 => "index_create",
    IndexDrop = 76 => "index_drop",
    IndexList = 77 => "index_list",
    IndexStatus = 139 => "index_status",
    IndexWait = 140 => "index_wait",
    IndexRename = 156 => "index_rename",
    SetWriteHook = 189 => "set_write_hook",
    GetWriteHook = 190 => "get_write_hook",
    Funcall = 64 => "funcall",
    Branch = 65 => "branch",
    Or = 66 => "or",
    And = 67 => "and",
    ForEach = 68 => "for_each",
    Func = 69 => "func",
    Asc = 73 => "asc",
    Desc = 74 => "desc",
    Info = 79 => "info",
    Match = 97 => "match",
    Upcase = 141 => "upcase",
    Downcase = 142 => "downcase",
    Sample = 81 => "sample",
    Default = 92 => "default",
    Json = 98 => "json",
    ToJsonString = 172 => "to_json_string",
    Iso8601 = 99 => "iso8601",
    ToIso8601 = 100 => "to_iso8601",
    EpochTime = 101 => "epoch_time",
    ToEpochTime = 102 => "to_epoch_time",
    Now = 103 => "now",
    InTimezone = 104 => "in_timezone",
    During = 105 => "during",
    Date = 106 => "date",
    TimeOfDay = 126 => "time_of_day",
    Timezone = 127 => "timezone",
    Year = 128 => "year",
    Month = 129 => "month",
    Day = 130 => "day",
    DayOfWeek = 131 => "day_of_week",
    DayOfYear = 132 => "day_of_year",
    Hours = 133 => "hours",
    Minutes = 134 => "minutes",
    Seconds = 135 => "seconds",
    Time = 136 => "time",
    Monday = 107 => "monday",
    Tuesday = 108 => "tuesday",
    Wednesday = 109 => "wednesday",
    Thursday = 110 => "thursday",
    Friday = 111 => "friday",
    Saturday = 112 => "saturday",
    Sunday = 113 => "sunday",
    January = 114 => "january",
    February = 115 => "february",
    March = 116 => "march",
    April = 117 => "april",
    May = 118 => "may",
    June = 119 => "june",
    July = 120 => "july",
    August = 121 => "august",
    September = 122 => "september",
    October = 123 => "october",
    November = 124 => "november",
    December = 125 => "december",
    Literal = 137 => "literal",
    Group = 144 => "group",
    Sum = 145 => "sum",
    Avg = 146 => "avg",
    Min = 147 => "min",
    Max = 148 => "max",
    Split = 149 => "split",
    Ungroup = 150 => "ungroup",
    Random = 151 => "random",
    Changes = 152 => "changes",
    Args = 154 => "args",
    Binary = 155 => "binary",
    Geojson = 157 => "geojson",
    ToGeojson = 158 => "to_geojson",
    Point = 159 => "point",
    Line = 160 => "line",
    Polygon = 161 => "polygon",
    Distance = 162 => "distance",
    Intersects = 163 => "intersects",
    Includes = 164 => "includes",
    Circle = 165 => "circle",
    GetIntersecting = 166 => "get_intersecting",
    Fill = 167 => "fill",
    GetNearest = 168 => "get_nearest",
    PolygonSub = 171 => "polygon_sub",
    Minval = 180 => "minval",
    Maxval = 181 => "maxval",
    BitAnd = 191 => "bit_and",
    BitOr = 192 => "bit_or",
    BitXor = 193 => "bit_xor",
    BitNot = 194 => "bit_not",
    BitSal = 195 => "bit_sal",
    BitSar = 196 => "bit_sar",
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
