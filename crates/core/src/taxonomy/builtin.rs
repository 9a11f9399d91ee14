//! Curated builtin taxonomy table.
//!
//! Grouped by functional family:
//! - `netw` networking (B build, C connect, L listen, S send, R receive,
//!   M modify)
//! - `reg` registry (H handle, R read, W write, D delete, C create)
//! - `file` file processing (H handle, R read, W write, D delete, C copy,
//!   M move, E enumerate)
//! - `proc` process manipulation (H handle, E enumerate, C create,
//!   R read memory, W write memory)
//! - `serv` service manipulation (H handle, C create, D delete, S start,
//!   R read, W write)
//! - `thread` threads (C create, O open, S suspend, R resume)
//! - `str` string manipulation (C compare)

pub(crate) const BUILTIN_VERSION: &str = "builtin-1";

pub(crate) const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    // Networking
    ("socket", "netwB"),
    ("connect", "netwC"),
    ("InternetOpen", "netwC"),
    ("InternetOpenA", "netwC"),
    ("InternetOpenW", "netwC"),
    ("InternetConnect", "netwC"),
    ("InternetConnectA", "netwC"),
    ("InternetConnectW", "netwC"),
    ("InternetOpenUrl", "netwC"),
    ("InternetOpenUrlA", "netwC"),
    ("InternetOpenUrlW", "netwC"),
    ("HttpOpenRequest", "netwC"),
    ("HttpOpenRequestA", "netwC"),
    ("HttpOpenRequestW", "netwC"),
    ("WinHttpConnect", "netwC"),
    ("WinHttpOpenRequest", "netwC"),
    ("bind", "netwL"),
    ("listen", "netwL"),
    ("accept", "netwL"),
    ("send", "netwS"),
    ("sendto", "netwS"),
    ("InternetWriteFile", "netwS"),
    ("HttpSendRequest", "netwS"),
    ("HttpSendRequestA", "netwS"),
    ("HttpSendRequestW", "netwS"),
    ("HttpSendRequestExA", "netwS"),
    ("HttpSendRequestExW", "netwS"),
    ("WSASend", "netwS"),
    ("WSASendTo", "netwS"),
    ("WinHttpSendRequest", "netwS"),
    ("WinHttpWriteData", "netwS"),
    ("recv", "netwR"),
    ("recvfrom", "netwR"),
    ("InternetReadFile", "netwR"),
    ("HttpReceiveHttpRequest", "netwR"),
    ("WSARecv", "netwR"),
    ("WSARecvFrom", "netwR"),
    ("WinHttpReceiveResponse", "netwR"),
    ("WinHttpReadData", "netwR"),
    ("WinHttpReadDataEx", "netwR"),
    ("URLDownloadToFile", "netwR"),
    ("URLDownloadToFileA", "netwR"),
    ("URLDownloadToFileW", "netwR"),
    ("inet_addr", "netwM"),
    ("htons", "netwM"),
    ("htonl", "netwM"),
    ("ntohs", "netwM"),
    ("ntohl", "netwM"),
    // Registry
    ("RegOpenKey", "regH"),
    ("RegQueryValue", "regR"),
    ("RegGetValue", "regR"),
    ("RegEnumValue", "regR"),
    ("RegSetValue", "regW"),
    ("RegSetKeyValue", "regW"),
    ("RegSetKeyValueEx", "regW"),
    ("RegDeleteValue", "regD"),
    ("RegDeleteKey", "regD"),
    ("RegDeleteKeyValue", "regD"),
    ("RegCreateKey", "regC"),
    // File processing
    ("CreateFile", "fileH"),
    ("CreateFileA", "fileH"),
    ("CreateFileW", "fileH"),
    ("fopen", "fileH"),
    ("fscan", "fileR"),
    ("fgetc", "fileR"),
    ("fgets", "fileR"),
    ("fread", "fileR"),
    ("ReadFile", "fileR"),
    ("ReadFileA", "fileR"),
    ("ReadFileW", "fileR"),
    ("flushfilebuffers", "fileW"),
    ("fprintf", "fileW"),
    ("fputc", "fileW"),
    ("fputs", "fileW"),
    ("fwrite", "fileW"),
    ("WriteFile", "fileW"),
    ("WriteFileA", "fileW"),
    ("WriteFileW", "fileW"),
    ("DeleteFile", "fileD"),
    ("DeleteFileA", "fileD"),
    ("DeleteFileW", "fileD"),
    ("CopyFile", "fileC"),
    ("CopyFileA", "fileC"),
    ("CopyFileW", "fileC"),
    ("MoveFile", "fileM"),
    ("MoveFileA", "fileM"),
    ("MoveFileW", "fileM"),
    ("FindFirstFile", "fileE"),
    ("FindFirstFileA", "fileE"),
    ("FindFirstFileW", "fileE"),
    ("FindNextFile", "fileE"),
    ("FindNextFileA", "fileE"),
    ("FindNextFileW", "fileE"),
    // String manipulation
    ("strcmp", "strC"),
    ("strncmp", "strC"),
    ("stricmp", "strC"),
    ("wcsicmp", "strC"),
    ("mbsicmp", "strC"),
    ("lstrcmp", "strC"),
    ("lstrcmpi", "strC"),
    // Service manipulation
    ("OpenService", "servH"),
    ("OpenServiceA", "servH"),
    ("OpenServiceW", "servH"),
    ("QueryServiceStatus", "servR"),
    ("QueryServiceStatusEx", "servR"),
    ("QueryServiceConfig", "servR"),
    ("QueryServiceConfigA", "servR"),
    ("QueryServiceConfigW", "servR"),
    ("ChangeServiceConfig", "servW"),
    ("ChangeServiceConfigA", "servW"),
    ("ChangeServiceConfigW", "servW"),
    ("ChangeServiceConfig2", "servW"),
    ("ChangeServiceConfig2A", "servW"),
    ("ChangeServiceConfig2W", "servW"),
    ("CreateService", "servC"),
    ("CreateServiceA", "servC"),
    ("CreateServiceW", "servC"),
    ("DeleteService", "servD"),
    ("DeleteServiceA", "servD"),
    ("DeleteServiceW", "servD"),
    ("StartService", "servS"),
    ("StartServiceA", "servS"),
    ("StartServiceW", "servS"),
    // Process manipulation
    ("CreateToolhelp32Snapshot", "procE"),
    ("Process32First", "procE"),
    ("Process32Next", "procE"),
    ("OpenProcess", "procH"),
    ("OpenProcessA", "procH"),
    ("OpenProcessW", "procH"),
    ("CreateProcess", "procC"),
    ("CreateProcessA", "procC"),
    ("CreateProcessW", "procC"),
    ("CreateProcessAsUser", "procC"),
    ("CreateProcessAsUserA", "procC"),
    ("CreateProcessAsUserW", "procC"),
    ("CreateProcessWithLogon", "procC"),
    ("CreateProcessWithLogonA", "procC"),
    ("CreateProcessWithLogonW", "procC"),
    ("CreateProcessWithToken", "procC"),
    ("CreateProcessWithTokenA", "procC"),
    ("CreateProcessWithTokenW", "procC"),
    ("ShellExecute", "procC"),
    ("ShellExecuteA", "procC"),
    ("ShellExecuteW", "procC"),
    ("ReadProcessMemory", "procR"),
    ("ReadProcessMemoryA", "procR"),
    ("ReadProcessMemoryW", "procR"),
    ("WriteProcessMemory", "procW"),
    ("WriteProcessMemoryA", "procW"),
    ("WriteProcessMemoryW", "procW"),
    // Threads
    ("CreateThread", "threadC"),
    ("CreateThreadEx", "threadC"),
    ("CreateRemoteThread", "threadC"),
    ("CreateRemoteThreadEx", "threadC"),
    ("beginthread", "threadC"),
    ("beginthreadex", "threadC"),
    ("OpenThread", "threadO"),
    ("OpenThreadA", "threadO"),
    ("OpenThreadW", "threadO"),
    ("SuspendThread", "threadS"),
    ("SuspendThreadA", "threadS"),
    ("SuspendThreadW", "threadS"),
    ("ResumeThread", "threadR"),
    ("ResumeThreadA", "threadR"),
    ("ResumeThreadW", "threadR"),
];
